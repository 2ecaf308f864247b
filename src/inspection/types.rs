//! Inspection record types.

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Borough kept by the shaping filter.
pub const MANHATTAN: &str = "Manhattan";

/// `critical_flag` value kept by the shaping filter.
pub const CRITICAL: &str = "Critical";

/// Displayed column of an inspection record, in table order.
///
/// `Display` yields the column label; [`Column::source_key`] yields the upstream field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Column {
    #[strum(to_string = "Restaurant Name")]
    RestaurantName,
    #[strum(to_string = "Borough")]
    Borough,
    #[strum(to_string = "Street")]
    Street,
    #[strum(to_string = "Zipcode")]
    Zipcode,
    #[strum(to_string = "Inspection Date")]
    InspectionDate,
    #[strum(to_string = "critical_flag")]
    CriticalFlag,
    #[strum(to_string = "Cuisine Description")]
    CuisineDescription,
    #[strum(to_string = "Violation Description")]
    ViolationDescription,
    #[strum(to_string = "Grade")]
    Grade,
}

impl Column {
    /// Field name in the upstream payload.
    pub fn source_key(&self) -> &'static str {
        match self {
            Column::RestaurantName => "dba",
            Column::Borough => "boro",
            Column::Street => "street",
            Column::Zipcode => "zipcode",
            Column::InspectionDate => "inspection_date",
            Column::CriticalFlag => "critical_flag",
            Column::CuisineDescription => "cuisine_description",
            Column::ViolationDescription => "violation_description",
            Column::Grade => "grade",
        }
    }

    /// All columns in display order.
    pub fn all() -> impl Iterator<Item = Column> {
        Column::iter()
    }
}

/// One shaped inspection row. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionRecord {
    #[serde(rename = "Restaurant Name")]
    pub restaurant_name: String,
    #[serde(rename = "Borough")]
    pub borough: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "Zipcode")]
    pub zipcode: String,
    #[serde(rename = "Inspection Date")]
    pub inspection_date: String,
    #[serde(rename = "critical_flag")]
    pub critical_flag: String,
    #[serde(rename = "Cuisine Description")]
    pub cuisine_description: String,
    #[serde(rename = "Violation Description")]
    pub violation_description: String,
    #[serde(rename = "Grade")]
    pub grade: String,
}

impl InspectionRecord {
    /// Value of the given column.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::RestaurantName => &self.restaurant_name,
            Column::Borough => &self.borough,
            Column::Street => &self.street,
            Column::Zipcode => &self.zipcode,
            Column::InspectionDate => &self.inspection_date,
            Column::CriticalFlag => &self.critical_flag,
            Column::CuisineDescription => &self.cuisine_description,
            Column::ViolationDescription => &self.violation_description,
            Column::Grade => &self.grade,
        }
    }

    /// Whether the record is a critical violation in Manhattan.
    pub fn is_manhattan_critical(&self) -> bool {
        self.critical_flag == CRITICAL && self.borough == MANHATTAN
    }
}
