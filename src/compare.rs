use crate::common::ComparisonOperator;

/// Maps a raw run of `<`, `>` and `=` to a comparison operator.
pub trait NormalizeComparison {
    fn normalize(&self, raw: &str) -> Option<ComparisonOperator>;
}

impl<F> NormalizeComparison for F
where
    F: Fn(&str) -> Option<ComparisonOperator>,
{
    fn normalize(&self, raw: &str) -> Option<ComparisonOperator> {
        self(raw)
    }
}

/// Accepts both orders of the two-character forms (`>=` and `=>`), `=` and
/// `==` for equality, and `<>` for inequality.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardComparison;

impl NormalizeComparison for StandardComparison {
    fn normalize(&self, raw: &str) -> Option<ComparisonOperator> {
        use ComparisonOperator::*;

        Some(match raw {
            "<" => Lt,
            ">" => Gt,
            "<=" | "=<" => Le,
            ">=" | "=>" => Ge,
            "=" | "==" => Eq,
            "<>" => Ne,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ComparisonOperator::*;

    #[test]
    fn test_standard_operators() {
        let norm = StandardComparison;
        assert_eq!(norm.normalize("<"), Some(Lt));
        assert_eq!(norm.normalize(">"), Some(Gt));
        assert_eq!(norm.normalize("<="), Some(Le));
        assert_eq!(norm.normalize("=<"), Some(Le));
        assert_eq!(norm.normalize(">="), Some(Ge));
        assert_eq!(norm.normalize("=>"), Some(Ge));
        assert_eq!(norm.normalize("="), Some(Eq));
        assert_eq!(norm.normalize("=="), Some(Eq));
        assert_eq!(norm.normalize("<>"), Some(Ne));
    }

    #[test]
    fn test_unrecognized_operators() {
        let norm = StandardComparison;
        assert_eq!(norm.normalize(""), None);
        assert_eq!(norm.normalize("<<"), None);
        assert_eq!(norm.normalize("><"), None);
        assert_eq!(norm.normalize(">=="), None);
    }
}
