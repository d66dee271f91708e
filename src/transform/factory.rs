//! Variant selection and construction.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierFactory;
use crate::error::UpliftError;
use crate::transform::kane::{GeneralizedKane, Kane};
use crate::transform::lai::{Lai, WeightedLai};
use crate::transform::pessimistic::Pessimistic;
use crate::transform::reflective::Reflective;
use crate::transform::UpliftModel;

/// The supported transformation variants.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Kane,
    GeneralizedKane,
    Lai,
    /// Same rule as [`VariantKind::Lai`]; kept as a separate name because
    /// both appear in the literature.
    Jaskowski,
    WeightedLai,
    Reflective,
    Pessimistic,
}

impl FromStr for VariantKind {
    type Err = UpliftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kane" => Ok(VariantKind::Kane),
            "generalized_kane" => Ok(VariantKind::GeneralizedKane),
            "lai" => Ok(VariantKind::Lai),
            "jaskowski" => Ok(VariantKind::Jaskowski),
            "weighted_lai" => Ok(VariantKind::WeightedLai),
            "reflective" => Ok(VariantKind::Reflective),
            "pessimistic" => Ok(VariantKind::Pessimistic),
            _ => Err(UpliftError::Configuration(format!(
                "unknown variant: {}. Expected one of kane, generalized_kane, lai, \
                 jaskowski, weighted_lai, reflective, pessimistic",
                s
            ))),
        }
    }
}

/// Build a boxed estimator of the requested variant.
///
/// Every delegate the variant needs is built fresh through `delegates`, so
/// repeated calls never hand out estimators sharing classifier state.
pub fn build_variant(
    kind: VariantKind,
    delegates: &dyn ClassifierFactory,
) -> Box<dyn UpliftModel> {
    match kind {
        VariantKind::Kane => Box::new(Kane::new(delegates.build())),
        VariantKind::GeneralizedKane => Box::new(GeneralizedKane::new(delegates.build())),
        VariantKind::Lai | VariantKind::Jaskowski => Box::new(Lai::new(delegates.build())),
        VariantKind::WeightedLai => Box::new(WeightedLai::new(delegates.build())),
        VariantKind::Reflective => Box::new(Reflective::new(delegates.build())),
        VariantKind::Pessimistic => Box::new(Pessimistic::new(delegates)),
    }
}
