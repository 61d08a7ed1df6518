/// Strongest and weakest entries of a dimension breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionExtremes {
    pub strongest: &'static str,
    pub weakest: &'static str,
}

/// Find the maximum- and minimum-valued entries of an ordered score list.
///
/// Ties go to the first-encountered entry. Returns `None` only for an empty
/// list; rating records always carry the full fixed dimension set, so callers
/// treat that as a data error rather than a normal case.
pub fn rank(entries: &[(&'static str, f64)]) -> Option<DimensionExtremes> {
    let (first, rest) = entries.split_first()?;

    let mut strongest = *first;
    let mut weakest = *first;

    for entry in rest {
        if entry.1 > strongest.1 {
            strongest = *entry;
        }
        if entry.1 < weakest.1 {
            weakest = *entry;
        }
    }

    Some(DimensionExtremes {
        strongest: strongest.0,
        weakest: weakest.0,
    })
}
