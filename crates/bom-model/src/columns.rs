//! Well-known column names of the BOM input and the derived columns.

/// Free-text description of the part.
pub const DESCRIPTION: &str = "描述";
/// Reference designators (e.g. `R1,R2`).
pub const REFERENCE: &str = "Reference";
pub const QUANTITY: &str = "Qty";
/// Canonical value (e.g. `10k`, `100nF`).
pub const VALUE: &str = "Value";
pub const FOOTPRINT: &str = "Footprint";
/// Hierarchical category (`Capacitor/Ceramic`).
pub const CATEGORY: &str = "Category";
pub const PART_NUMBER: &str = "Part-DB IPN";
pub const DISTRIBUTOR_PART_NUMBER: &str = "lcsc#";
pub const MANUFACTURER: &str = "manf";
pub const MANUFACTURER_PART_NUMBER: &str = "manf#";

/// Localized category label, derived by the classifier.
pub const CATEGORY_LABEL: &str = "Category_CN";
/// Trimmed top-level category segment.
pub const CATEGORY_TOP: &str = "Category_Top";
/// Copy of [`CATEGORY_LABEL`] materialized after sorting for display grouping.
pub const CATEGORY_DISPLAY: &str = "Category_CN_Display";

/// Required input columns, in reporting order.
pub const REQUIRED: [&str; 10] = [
    DESCRIPTION,
    REFERENCE,
    QUANTITY,
    VALUE,
    FOOTPRINT,
    CATEGORY,
    PART_NUMBER,
    DISTRIBUTOR_PART_NUMBER,
    MANUFACTURER,
    MANUFACTURER_PART_NUMBER,
];
