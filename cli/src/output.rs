use serde::Serialize;

use crate::error::CliError;

/// Print `data` to stdout as indented JSON, non-ASCII kept as is.
pub fn print_json<T: Serialize>(data: &T) -> Result<(), CliError> {
    println!("{}", render_json(data)?);
    Ok(())
}

fn render_json<T: Serialize>(data: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(data).map_err(CliError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_keeps_non_ascii() {
        let rendered = render_json(&json!({ "name": "Nyhedsbrev æøå" })).unwrap();

        assert_eq!(rendered, "{\n  \"name\": \"Nyhedsbrev æøå\"\n}");
    }
}
