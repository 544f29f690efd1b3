use pluralizer::pluralize;

/// Converts a camelCase or PascalCase string to snake_case.
///
/// An underscore is inserted wherever a lowercase letter is followed by an
/// uppercase one, and everything is lowercased. Runs of capitals (acronyms)
/// are kept together.
///
/// # Examples
///
/// ```
/// use notes_app::utils::strings::camel_to_snake_case;
///
/// assert_eq!(camel_to_snake_case("camelCase".to_string()), "camel_case");
/// assert_eq!(camel_to_snake_case("ThisIsATest".to_string()), "this_is_atest");
/// assert_eq!(camel_to_snake_case("ABC".to_string()), "abc");
/// ```
pub fn camel_to_snake_case(camel: String) -> String {
    let mut snake = String::with_capacity(camel.len() + 4);
    let mut chars = camel.chars().peekable();

    while let Some(current) = chars.next() {
        if let Some(&next) = chars.peek() {
            if current.is_ascii_lowercase() && next.is_ascii_uppercase() {
                snake.push(current);
                snake.push('_');
            } else {
                snake.push(current.to_ascii_lowercase());
            }
        } else {
            // Handle the last character
            snake.push(current.to_ascii_lowercase());
        }
    }

    snake
}

/// Table name for a resource type: snake_case, pluralized.
///
/// ```
/// use notes_app::utils::strings::table_name_for;
///
/// assert_eq!(table_name_for("Note"), "notes");
/// ```
pub fn table_name_for(type_name: &str) -> String {
    pluralize(camel_to_snake_case(type_name.to_string()).as_str(), 2, false)
}
