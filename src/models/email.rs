use serde::{Deserialize, Serialize};

/// Metadata for one message, enough for a list view (no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSummary {
    pub id: String,
    pub thread_id: String,
    pub subject: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub snippet: String,
    pub label_ids: Vec<String>,
    pub is_unread: bool,
}

impl EmailSummary {
    pub fn has_label(&self, label_id: &str) -> bool {
        self.label_ids.iter().any(|l| l == label_id)
    }
}

/// Metadata describing one attachment. The file content itself is not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInfo {
    pub filename: String,
    pub mime_type: String,
    pub size: u64,
}

impl AttachmentInfo {
    pub fn is_image(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("image/")
    }
}

/// Full content of one message. The summary fields are flattened so the
/// wire form is a plain superset of [`EmailSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDetail {
    #[serde(flatten)]
    pub summary: EmailSummary,
    pub body: String,
    pub cc: String,
    pub bcc: String,
    pub attachments: Vec<AttachmentInfo>,
}

impl EmailDetail {
    pub fn from_summary(
        summary: EmailSummary,
        body: impl Into<String>,
        cc: impl Into<String>,
        bcc: impl Into<String>,
        attachments: Vec<AttachmentInfo>,
    ) -> Self {
        Self {
            summary,
            body: body.into(),
            cc: cc.into(),
            bcc: bcc.into(),
            attachments,
        }
    }

    pub fn summary(&self) -> &EmailSummary {
        &self.summary
    }

    pub fn into_summary(self) -> EmailSummary {
        self.summary
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn total_attachment_size(&self) -> u64 {
        self.attachments.iter().map(|a| a.size).sum()
    }
}

impl From<EmailDetail> for EmailSummary {
    fn from(detail: EmailDetail) -> Self {
        detail.into_summary()
    }
}
