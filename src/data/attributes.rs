/// Attribute names of the horse colic blood-panel schema, in column order.
pub const HORSE_COLIC_ATTRIBUTES: [&str; 16] = [
    "K",
    "Na",
    "CL",
    "HCO3",
    "Endotoxin",
    "Aniongap",
    "PLA2",
    "SDH",
    "GLDH",
    "TPP",
    "Breath rate",
    "PCV",
    "Pulse rate",
    "Fibrinogen",
    "Dimer",
    "FibPerDim",
];

/// Display names for feature columns. Only used when rendering; the tree itself
/// works with column indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureNames {
    names: Vec<String>,
}

impl FeatureNames {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn horse_colic() -> Self {
        Self::new(HORSE_COLIC_ATTRIBUTES)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of column `index`, or `feature[index]` when the table has no entry.
    pub fn name(&self, index: usize) -> String {
        self.names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("feature[{}]", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horse_colic_names() {
        let names = FeatureNames::horse_colic();
        assert_eq!(names.len(), 16);
        assert_eq!(names.name(0), "K");
        assert_eq!(names.name(10), "Breath rate");
        assert_eq!(names.name(15), "FibPerDim");
    }

    #[test]
    fn test_name_falls_back_to_index() {
        let names = FeatureNames::new(["width"]);
        assert_eq!(names.name(0), "width");
        assert_eq!(names.name(3), "feature[3]");
        assert_eq!(FeatureNames::default().name(0), "feature[0]");
    }
}
