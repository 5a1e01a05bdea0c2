use crate::constants::{
    INDICATOR_ACTIVE_CLASS, INDICATOR_LABEL_ID, INDICATOR_ROW_ID, STATUS_LABEL_ID,
};
use swarm_core::StatusSink;
use web_sys as web;

/// Status label and indicator row in the page. Missing elements are skipped.
pub struct DomStatusSink {
    status_label: Option<web::Element>,
    indicator_row: Option<web::Element>,
    indicator_label: Option<web::Element>,
}

impl DomStatusSink {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            status_label: document.get_element_by_id(STATUS_LABEL_ID),
            indicator_row: document.get_element_by_id(INDICATOR_ROW_ID),
            indicator_label: document.get_element_by_id(INDICATOR_LABEL_ID),
        }
    }
}

impl StatusSink for DomStatusSink {
    fn set_status(&mut self, message: &str) {
        if let Some(el) = &self.status_label {
            el.set_text_content(Some(message));
        }
    }

    fn set_indicator(&mut self, active: bool, message: &str) {
        let Some(row) = &self.indicator_row else {
            return;
        };
        _ = row
            .class_list()
            .toggle_with_force(INDICATOR_ACTIVE_CLASS, active);
        if let Some(label) = &self.indicator_label {
            label.set_text_content(Some(message));
        }
    }
}
