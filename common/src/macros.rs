//! Define our own macros to simplify the code
//!

/// Simple macro to generate PathBuf from a series of entries
///
#[macro_export]
macro_rules! makepath {
    ($($item:expr),+) => {
        [
        $(::std::path::PathBuf::from($item),)+
        ]
        .iter()
        .collect::<::std::path::PathBuf>()
    };
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    #[test]
    fn test_makepath() {
        let p = makepath!("/home", ".config", "aloft");
        assert_eq!(PathBuf::from("/home/.config/aloft"), p);
    }
}
