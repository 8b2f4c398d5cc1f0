//! Range function registry

use std::fmt;

/// Functions that aggregate over a rectangular block of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFunction {
    Average,
    /// Alias of `AVERAGE`
    Mean,
    Sum,
    Product,
    Max,
    Min,
    Median,
    /// Sample standard deviation
    Stdev,
}

impl RangeFunction {
    /// Every registered function, in registry order
    pub const ALL: [Self; 8] = [
        Self::Average,
        Self::Mean,
        Self::Sum,
        Self::Product,
        Self::Max,
        Self::Min,
        Self::Median,
        Self::Stdev,
    ];

    /// Look up a function by its uppercase name
    ///
    /// Matching is exact: callers uppercase the name first.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// Uppercase function name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::Mean => "MEAN",
            Self::Sum => "SUM",
            Self::Product => "PRODUCT",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Median => "MEDIAN",
            Self::Stdev => "STDEV",
        }
    }
}

impl fmt::Display for RangeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(RangeFunction::from_name("SUM"), Some(RangeFunction::Sum));
        assert_eq!(RangeFunction::from_name("sum"), None);
        assert_eq!(RangeFunction::from_name("COUNT"), None);
    }

    #[test]
    fn test_every_name_round_trips() {
        for function in RangeFunction::ALL {
            assert_eq!(RangeFunction::from_name(function.name()), Some(function));
            assert_eq!(function.to_string(), function.name());
        }
    }
}
