use super::{AttributeName, AttributeValue};
use crate::engine::{EntryPointResolver, NamespaceResolver};
use crate::env::BuildEnvironment;
use crate::error::ConfigError;

pub const MANIFEST_VERSION: &str = "Manifest-Version";
pub const CREATED_BY: &str = "Created-By";
pub const AUTOMATIC_MODULE_NAME: &str = "Automatic-Module-Name";
pub const MAIN_CLASS: &str = "Main-Class";
pub const PREMAIN_CLASS: &str = "Premain-Class";
pub const AGENT_CLASS: &str = "Agent-Class";
pub const LAUNCHER_AGENT_CLASS: &str = "Launcher-Agent-Class";
pub const BUILT_BY: &str = "Built-By";
pub const BUILD_JDK_SPEC: &str = "Build-Jdk-Spec";
pub const BUILD_JDK: &str = "Build-Jdk";
pub const BUILD_OS: &str = "Build-Os";

pub const MANIFEST_VERSION_VALUE: &str = "1.0";

/// Value for an attribute requested without an explicit `name:value`.
pub fn default_value(name: &AttributeName, env: &BuildEnvironment) -> Result<AttributeValue, ConfigError> {
    let fact = |value: Option<String>| {
        value
            .map(AttributeValue::Literal)
            .ok_or_else(|| ConfigError::unavailable(name.as_str()))
    };

    if name.matches(CREATED_BY) || name.matches(BUILD_JDK) {
        fact(env.runtime())
    } else if name.matches(AUTOMATIC_MODULE_NAME) {
        Ok(AttributeValue::pending(NamespaceResolver::new()))
    } else if name.matches(MAIN_CLASS) {
        Ok(AttributeValue::pending(EntryPointResolver::main()))
    } else if name.matches(PREMAIN_CLASS) {
        Ok(AttributeValue::pending(EntryPointResolver::premain()))
    } else if name.matches(AGENT_CLASS) || name.matches(LAUNCHER_AGENT_CLASS) {
        Ok(AttributeValue::pending(EntryPointResolver::agentmain()))
    } else if name.matches(BUILT_BY) {
        fact(env.user_name.clone())
    } else if name.matches(BUILD_JDK_SPEC) {
        fact(env.spec_version.clone())
    } else if name.matches(BUILD_OS) {
        fact(env.operating_system())
    } else {
        Err(ConfigError::unrecognized_name(name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> BuildEnvironment {
        BuildEnvironment {
            runtime_version: Some("17.0.2".to_string()),
            runtime_vendor: Some("Eclipse Adoptium".to_string()),
            spec_version: Some("17".to_string()),
            user_name: Some("builder".to_string()),
            os_name: Some("Linux".to_string()),
            os_version: Some("6.1.0".to_string()),
            os_arch: Some("amd64".to_string()),
        }
    }

    fn literal(name: &str, env: &BuildEnvironment) -> String {
        match default_value(&AttributeName::new(name).unwrap(), env) {
            Ok(AttributeValue::Literal(v)) => v,
            other => panic!("expected a literal for {name}, got {other:?}"),
        }
    }

    #[test]
    fn test_environment_facts() {
        let env = env();
        assert_eq!(literal("Created-By", &env), "17.0.2 (Eclipse Adoptium)");
        assert_eq!(literal("build-jdk", &env), "17.0.2 (Eclipse Adoptium)");
        assert_eq!(literal("Built-By", &env), "builder");
        assert_eq!(literal("Build-Jdk-Spec", &env), "17");
        assert_eq!(literal("BUILD-OS", &env), "Linux (6.1.0; amd64)");
    }

    #[test]
    fn test_resolvers() {
        let env = env();
        for name in [
            "Main-Class",
            "Premain-Class",
            "Agent-Class",
            "Launcher-Agent-Class",
            "automatic-module-name",
        ] {
            let value = default_value(&AttributeName::new(name).unwrap(), &env).unwrap();
            assert!(value.is_pending(), "{name} should resolve from declarations");
        }
    }

    #[test]
    fn test_unrecognized() {
        let err = default_value(&AttributeName::new("X-Custom").unwrap(), &env()).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized name: X-Custom");
    }

    #[test]
    fn test_unavailable_fact() {
        let err = default_value(
            &AttributeName::new("Built-By").unwrap(),
            &BuildEnvironment::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No value available for Built-By");
    }
}
