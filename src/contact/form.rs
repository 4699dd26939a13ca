use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EMBED_TITLE: &str = "📧 New Contact Form Submission";
pub const EMBED_COLOR: u32 = 0x9F7E2F;
const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub context: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: &str, inline: bool) -> Self {
        let value = if value.is_empty() { NOT_PROVIDED } else { value };
        Self { name: name.to_string(), value: value.to_string(), inline }
    }
}

impl ContactForm {
    pub fn payload(&self, timestamp: DateTime<Utc>) -> WebhookPayload {
        let mut fields = vec![
            EmbedField::new("👤 Name", &self.name, true),
            EmbedField::new("📧 Email", &self.email, true),
            EmbedField::new("💬 What are they trying to do?", &self.message, false),
        ];
        if !self.context.is_empty() {
            fields.push(EmbedField::new("📝 Additional Context", &self.context, false));
        }

        WebhookPayload {
            embeds: vec![Embed {
                title: EMBED_TITLE.to_string(),
                color: EMBED_COLOR,
                fields,
                timestamp,
            }],
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
