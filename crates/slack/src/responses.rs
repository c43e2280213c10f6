use serde::Serialize;

use catfacts_core::domain::fact::Fact;

pub const ATTACHMENT_FALLBACK: &str = "Meow!";

pub const CATEGORIES_IMAGE_URL: &str =
    "https://loveenglish.org/wp-content/uploads/2020/11/Cat-Breeds-1.jpg";

pub const CATEGORIES_PREFIX: &str = "The available CATegories are: ";

pub const GREETING_TEXT: &str = "Welcome to \"Cat facts Over 9000!\"";

pub const ABOUT_TEXT: &str = "Welcome to 'Cat Facts Over 9000' - the ultimate cat facts database for cat enthusiasts!
Get ready to embark on a whisker-twitching journey through the enchanting world of cats, where every tidbit is claw-some and every fact will have you feline fine.
So, paws everything else, and let's dive into a purr-adise of cat-tastic knowledge!

Type `/cat-facts info` to find information about using this database!";

pub const INFO_TEXT: &str = "Type `/cat-facts` to get a random cat fact.
Type `/cat-facts fat` to get a fact about fat cats.
Type `/cat-facts cats` to get a list of fact categories.
";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub image_url: String,
}

impl Attachment {
    pub fn image(image_url: impl Into<String>) -> Self {
        Self { fallback: ATTACHMENT_FALLBACK.to_owned(), image_url: image_url.into() }
    }
}

/// Slash-command response envelope. Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlashResponse {
    pub attachments: Vec<Attachment>,
    pub response_type: ResponseType,
    pub text: String,
}

impl SlashResponse {
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self { attachments: Vec::new(), response_type: ResponseType::InChannel, text: text.into() }
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Body produced by exactly one command handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResponse {
    Text(String),
    Payload(SlashResponse),
}

pub fn about_message() -> CommandResponse {
    CommandResponse::Text(ABOUT_TEXT.to_owned())
}

pub fn info_message() -> CommandResponse {
    CommandResponse::Text(INFO_TEXT.to_owned())
}

pub fn categories_message(categories: &[&str]) -> CommandResponse {
    CommandResponse::Payload(
        SlashResponse::in_channel(format!("{CATEGORIES_PREFIX}{}", categories.join(", ")))
            .attachment(Attachment::image(CATEGORIES_IMAGE_URL)),
    )
}

pub fn fact_message(fact: &Fact) -> CommandResponse {
    CommandResponse::Payload(
        SlashResponse::in_channel(fact.message.clone())
            .attachment(Attachment::image(fact.cache_busted_image_url())),
    )
}
