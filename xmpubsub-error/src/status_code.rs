use std::fmt;

/// Коды статуса для категоризации ошибок.
///
/// # Диапазоны:
/// - 2xxx: Ошибки данных вызывающего кода (адреса, имена узлов)
/// - 6xxx: Транспорт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 2xxx: Ошибки данных ===
    InvalidAddress = 2002,
    InvalidNode = 2003,

    // === 6xxx: Транспорт ===
    ConnectionClosed = 6001,
    SendFailed = 6005,
}

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Ошибка в данных вызывающего кода (диапазон 2xxx). Повтор той же
    /// операции с теми же данными не поможет.
    pub fn is_client_error(&self) -> bool {
        (2000..=2999).contains(&self.code())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет разделение ошибок по диапазонам.
    #[test]
    fn test_ranges() {
        assert!(StatusCode::InvalidNode.is_client_error());
        assert!(StatusCode::InvalidAddress.is_client_error());
        assert!(!StatusCode::SendFailed.is_client_error());
        assert!(!StatusCode::ConnectionClosed.is_client_error());
    }

    /// Тест проверяет формат `Display`: строка должна содержать имя варианта и
    /// числовой код.
    #[test]
    fn test_display_contains_name_and_code() {
        let s = format!("{}", StatusCode::SendFailed);
        assert_eq!(s, "SendFailed (6005)");
    }
}
