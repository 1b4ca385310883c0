//! CSV bulk-upload template generation and download.
//!
//! The template ships a commented guide below the sample rows; the banner
//! tells uploaders to delete everything under it before submitting.

#[cfg(test)]
#[path = "csv_template_test.rs"]
mod csv_template_test;

use crate::net::types::{Category, Transmission};
use crate::state::predict::{COMMON_ISSUES, SELLER_TYPES};

/// Download name for the generated template.
pub const TEMPLATE_FILE_NAME: &str = "motorcycle_template.csv";

/// Column header row expected by the bulk upload endpoint.
pub const TEMPLATE_HEADER: &str = "brand,model,category,displacement,transmission,yearRange,priceRangeMin,priceRangeMax,year,mileage,sellerType,owner,knownIssues,predictedPrice";

const SAMPLE_ROWS: &[&str] = &[
    "Honda,Click 125i,Scooter,125,Automatic,2018-2025,81400,81400,2021,12000,Private,2,Cosmetic damage,68000",
    "Yamaha,NMAX,Scooter,155,Automatic,2020-2025,119900,119900,2022,5000,Dealer,1,None,105000",
    "Suzuki,Raider R150,Underbone,150,Manual,2016-2024,97900,97900,2023,3500,Private,1,Oil leaks,89500",
];

/// Build the full template: header, sample rows, and a commented guide.
#[must_use]
pub fn template_csv() -> String {
    let mut out = String::new();
    out.push_str(TEMPLATE_HEADER);
    out.push('\n');
    for row in SAMPLE_ROWS {
        out.push_str(row);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("# ============================================================\n");
    out.push_str("# GUIDE INFORMATION - DELETE EVERYTHING BELOW THIS LINE BEFORE UPLOADING\n");
    out.push_str("# ============================================================\n#\n");
    out.push_str("# VALID CATEGORY VALUES:\n");
    for category in Category::ALL {
        out.push_str(&format!("# - {category}\n"));
    }
    out.push_str("#\n# VALID TRANSMISSION VALUES:\n");
    for transmission in Transmission::ALL {
        out.push_str(&format!("# - {transmission}\n"));
    }
    out.push_str("#\n# VALID SELLER TYPES:\n");
    for seller in SELLER_TYPES {
        out.push_str(&format!("# - {seller}\n"));
    }
    out.push_str("#\n# VALID KNOWN ISSUES:\n");
    for issue in COMMON_ISSUES {
        out.push_str(&format!("# - {issue}\n"));
    }
    out.push_str("# - None\n#\n");
    out.push_str("# FORMAT GUIDE:\n");
    out.push_str("# - yearRange: Format as \"YYYY-YYYY\" (start year-end year)\n");
    out.push_str("# - priceRangeMin/Max: Minimum and maximum price in currency units\n");
    out.push_str("# - owner: Can be \"1\", \"2\", \"3\", \"4+\", etc.\n");
    out.push_str("# - displacement: Engine displacement in cc (numeric value only)\n");
    out.push_str("# - mileage: Total distance traveled in kilometers (numeric value only)\n");
    out.push_str("# - All numeric fields should not include commas or currency symbols\n");
    out
}

/// Trigger a browser download of the template. No-op on the server.
pub fn download_template() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&template_csv()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(TEMPLATE_FILE_NAME);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}
