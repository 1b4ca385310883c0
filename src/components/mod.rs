//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and grid surfaces while reading/writing shared
//! state from Leptos context providers; network side effects stay in `net`
//! and are invoked from event handlers here.

pub mod csv_upload;
pub mod filter_bar;
pub mod model_info_badge;
pub mod notice_list;
pub mod predictor_form;
pub mod record_edit_dialog;
pub mod record_json_dialog;
pub mod record_table;
pub mod train_button;
