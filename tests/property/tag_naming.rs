//! Property-based tests for tag resolution and validation.

use proptest::prelude::*;
use runway::context::Runner;
use runway::naming::{resolve_tag_name, validate_tag, CiEnv, ENV_CLOUD_BUILD_REF, ENV_GITHUB_REF};

/// Explicit tags pass through resolution unchanged for every runner.
#[test]
fn test_explicit_tag_passthrough_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z0-9-]{1,32}", |tag| {
            let env = CiEnv::default();
            for ci in [Runner::GithubActions, Runner::CloudBuild, Runner::Local] {
                let resolved = resolve_tag_name(&tag, ci, &env).unwrap();
                prop_assert_eq!(&resolved, &tag);
            }
            Ok(())
        })
        .unwrap();
}

/// Derived tags always carry the tag- prefix and none of the rewritten
/// characters, whatever the ref looks like.
#[test]
fn test_derived_tag_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-zA-Z0-9./: _-]{1,64}", |ref_name| {
            for (ci, var) in [
                (Runner::GithubActions, ENV_GITHUB_REF),
                (Runner::CloudBuild, ENV_CLOUD_BUILD_REF),
            ] {
                let env = CiEnv::from_vars([(var, ref_name.as_str())]);
                let resolved = resolve_tag_name("", ci, &env).unwrap();
                prop_assert!(resolved.starts_with("tag-"));
                prop_assert!(!resolved
                    .chars()
                    .any(|c| matches!(c, '.' | '/' | ':' | ' ' | '_')));
            }
            Ok(())
        })
        .unwrap();
}

/// Validation accepts exactly the lowercase alphanumeric/hyphen alphabet.
#[test]
fn test_tag_validation_alphabet_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z0-9-]{1,32}", |tag| {
            prop_assert!(validate_tag(&tag).is_ok());
            Ok(())
        })
        .unwrap();

    runner
        .run(&"[a-z0-9-]{0,8}[A-Z._/: ][a-z0-9-]{0,8}", |tag| {
            prop_assert!(validate_tag(&tag).is_err());
            Ok(())
        })
        .unwrap();
}
