//! Quadrant labeling for the class-transformation trick.
//!
//! Every observation `(y, t)` falls into exactly one of four joint
//! response×treatment categories. The four-class encoding assigns the fixed
//! class ids TR=0, CN=1, TN=2, CR=3; the binary encoding collapses the
//! quadrants into "aligned" (TR or CN → 1) and "misaligned" (TN or CR → 0).
//! Delegate classifiers must report probability columns in this same order.
use ndarray::Array1;

use crate::error::{Result, UpliftError};

/// The four joint response×treatment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Treated and responded (t≠0, y≠0).
    TreatmentResponder,
    /// Untreated and did not respond (t=0, y=0).
    ControlNonResponder,
    /// Treated but did not respond (t≠0, y=0).
    TreatmentNonResponder,
    /// Responded without treatment (t=0, y≠0).
    ControlResponder,
}

impl Quadrant {
    /// Classify a single `(y, t)` pair.
    ///
    /// `y` is binary-like: zero means "no response", anything else means
    /// "response". Likewise `t`: zero is control, nonzero is treated. A NaN
    /// in either value is neither zero nor meaningfully nonzero and would
    /// let the row fall through the partition, so it is rejected.
    pub fn of(y: f64, t: f64) -> Result<Quadrant> {
        if y.is_nan() || t.is_nan() {
            return Err(UpliftError::Data(format!(
                "cannot classify observation (y={}, t={}): NaN values do not \
                 belong to any response/treatment quadrant",
                y, t
            )));
        }
        let responded = y != 0.0;
        let treated = t != 0.0;
        Ok(match (responded, treated) {
            (true, true) => Quadrant::TreatmentResponder,
            (false, false) => Quadrant::ControlNonResponder,
            (false, true) => Quadrant::TreatmentNonResponder,
            (true, false) => Quadrant::ControlResponder,
        })
    }

    /// The fixed four-class id: TR=0, CN=1, TN=2, CR=3.
    pub fn class_id(self) -> usize {
        match self {
            Quadrant::TreatmentResponder => 0,
            Quadrant::ControlNonResponder => 1,
            Quadrant::TreatmentNonResponder => 2,
            Quadrant::ControlResponder => 3,
        }
    }

    /// Whether response and treatment point the same way (TR or CN).
    pub fn is_aligned(self) -> bool {
        matches!(
            self,
            Quadrant::TreatmentResponder | Quadrant::ControlNonResponder
        )
    }

    /// The binary class id: 1 for aligned (TR∨CN), 0 for misaligned (TN∨CR).
    pub fn binary_id(self) -> usize {
        self.is_aligned() as usize
    }
}

fn check_same_length(y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
    if y.len() != t.len() {
        return Err(UpliftError::ShapeMismatch {
            expected: y.len(),
            got: t.len(),
            what: "treatment vector t",
        });
    }
    Ok(())
}

/// Encode every `(y, t)` row into its four-class quadrant id.
pub fn encode_four_class(y: &Array1<f64>, t: &Array1<f64>) -> Result<Array1<usize>> {
    check_same_length(y, t)?;
    let mut labels = Vec::with_capacity(y.len());
    for (&yi, &ti) in y.iter().zip(t.iter()) {
        labels.push(Quadrant::of(yi, ti)?.class_id());
    }
    Ok(Array1::from_vec(labels))
}

/// Encode every `(y, t)` row into its binary aligned/misaligned id.
pub fn encode_binary(y: &Array1<f64>, t: &Array1<f64>) -> Result<Array1<usize>> {
    check_same_length(y, t)?;
    let mut labels = Vec::with_capacity(y.len());
    for (&yi, &ti) in y.iter().zip(t.iter()) {
        labels.push(Quadrant::of(yi, ti)?.binary_id());
    }
    Ok(Array1::from_vec(labels))
}
