//! Integration tests for `Optional`.

use permars::option::{EmptyOptionalError, Optional};
use rstest::rstest;

#[rstest]
fn test_present_roundtrip() {
    let optional = Optional::present("value".to_string());
    assert!(optional.has_value());
    assert_eq!(optional.value(), Ok(&"value".to_string()));
    assert_eq!(optional.into_value(), Ok("value".to_string()));
}

#[rstest]
fn test_empty_access_is_an_error() {
    let empty: Optional<i32> = Optional::empty();
    assert_eq!(empty.value(), Err(EmptyOptionalError));
    assert_eq!(empty.try_get(), None);
    assert_eq!(empty.value_or(7), 7);
}

#[rstest]
fn test_equality() {
    assert_eq!(Optional::<i32>::empty(), Optional::empty());
    assert_eq!(Optional::present(1), Optional::present(1));
    assert_ne!(Optional::present(1), Optional::empty());
}

#[rstest]
fn test_std_option_interop() {
    let from_some: Optional<i32> = Some(3).into();
    assert_eq!(from_some, Optional::present(3));

    let to_option: Option<i32> = Optional::present(3).into();
    assert_eq!(to_option, Some(3));

    let from_none: Optional<i32> = None.into();
    assert!(from_none.is_empty());
}

#[rstest]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(EmptyOptionalError);
    assert_eq!(error.to_string(), "optional is empty");
}

#[cfg(feature = "typeclass")]
mod typeclass_laws {
    use super::*;
    use permars::typeclass::{Functor, Monad};

    #[rstest]
    fn test_functor_composition() {
        let double = |n: i32| n * 2;
        let stringify = |n: i32| n.to_string();
        assert_eq!(
            Optional::present(5).fmap(double).fmap(stringify),
            Optional::present(5).fmap(|n| stringify(double(n)))
        );
    }

    #[rstest]
    fn test_monad_associativity() {
        let increment = |n: i32| Optional::present(n + 1);
        let double = |n: i32| Optional::present(n * 2);

        let left = Optional::present(3).flat_map(increment).flat_map(double);
        let right = Optional::present(3).flat_map(|n| increment(n).flat_map(double));
        assert_eq!(left, right);
    }
}
