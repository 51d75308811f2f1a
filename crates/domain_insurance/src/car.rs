//! Car entity

use core_kernel::CarId;
use serde::{Deserialize, Serialize};

/// A registered car
///
/// Cars are read-only for this domain: they own policies and claims but are
/// created and maintained elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier
    pub id: CarId,
    /// Vehicle identification number
    pub vin: String,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Year of manufacture
    pub year_of_manufacture: i32,
}

impl Car {
    pub fn new(
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year_of_manufacture: i32,
    ) -> Self {
        Self {
            id: CarId::new_v7(),
            vin: vin.into(),
            make: make.into(),
            model: model.into(),
            year_of_manufacture,
        }
    }
}
