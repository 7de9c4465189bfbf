//! Splitting of the attribute option string, e.g.
//! `Main-Class,Automatic-Module-Name,X-Team:platform`.

pub const DEFAULT_OPTIONS: &str = "Main-Class";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `name:value`
    Explicit(String),
    /// Bare `name`, derived from declarations or the build environment.
    Resolve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeOption {
    pub name: String,
    pub value: OptionValue,
}

/// Splits on every comma, keeping empty tokens, then on the first colon of
/// each token.
pub fn parse_options(options: &str) -> Vec<AttributeOption> {
    options
        .split(',')
        .map(|token| match token.split_once(':') {
            Some((name, value)) => AttributeOption {
                name: name.to_string(),
                value: OptionValue::Explicit(value.to_string()),
            },
            None => AttributeOption {
                name: token.to_string(),
                value: OptionValue::Resolve,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(name: &str) -> AttributeOption {
        AttributeOption {
            name: name.to_string(),
            value: OptionValue::Resolve,
        }
    }

    fn explicit(name: &str, value: &str) -> AttributeOption {
        AttributeOption {
            name: name.to_string(),
            value: OptionValue::Explicit(value.to_string()),
        }
    }

    #[test]
    fn test_default_options() {
        assert_eq!(parse_options(DEFAULT_OPTIONS), vec![resolve("Main-Class")]);
    }

    #[test]
    fn test_mixed_options() {
        assert_eq!(
            parse_options("Main-Class,X-Team:platform,Automatic-Module-Name"),
            vec![
                resolve("Main-Class"),
                explicit("X-Team", "platform"),
                resolve("Automatic-Module-Name"),
            ]
        );
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(
            parse_options("Class-Path:lib/a.jar http://host:8080/b.jar"),
            vec![explicit("Class-Path", "lib/a.jar http://host:8080/b.jar")]
        );
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        assert_eq!(
            parse_options("Main-Class,,X:"),
            vec![resolve("Main-Class"), resolve(""), explicit("X", "")]
        );
        assert_eq!(parse_options(""), vec![resolve("")]);
    }
}
