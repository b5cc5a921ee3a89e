/// Немедленно возвращает ошибку из текущей функции, обернув её в
/// [`StackError`](crate::StackError).
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::StackError::from($err))
    };
}

/// Проверяет условие и вызывает `bail!`, если оно ложно.
///
/// ```ignore
/// use xmpubsub_error::{ensure, PubsubError, XmppResult};
///
/// fn check_node(node: &str) -> XmppResult<()> {
///     ensure!(!node.is_empty(), PubsubError::InvalidNode { node: node.to_string() });
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            $crate::bail!($err);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{PubsubError, StatusCode, TransportError, XmppResult};

    #[test]
    fn test_bail_wraps_domain_error() {
        fn example() -> XmppResult<()> {
            bail!(TransportError::Closed);
        }

        let err = example().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::ConnectionClosed);
    }

    #[test]
    fn test_ensure() {
        fn validate(node: &str) -> XmppResult<()> {
            ensure!(
                !node.is_empty(),
                PubsubError::InvalidNode {
                    node: node.to_string()
                }
            );
            Ok(())
        }

        assert!(validate("weather").is_ok());
        let err = validate("").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::InvalidNode);
    }
}
