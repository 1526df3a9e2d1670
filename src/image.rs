use serde_json::Value;

use crate::Goal;

pub const NO_SIGNALS_ADVICE: &str = "No image signals provided. (Optional: tell us if the image shows a person, the product, or promo text and we’ll evaluate it.)";

/// What the caller says the creative shows. Unknown fields read as false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSignals {
    pub has_person: Option<bool>,
    pub has_product: Option<bool>,
    pub has_offer_text: Option<bool>,
}

impl ImageSignals {
    /// Lenient read of a client-supplied value. Anything that is not an
    /// object carries no signals; fields are read by JSON truthiness.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let flag = |key: &str| object.get(key).map(truthy);
        Some(Self {
            has_person: flag("hasPerson"),
            has_product: flag("hasProduct"),
            has_offer_text: flag("hasOfferText"),
        })
    }

    pub fn person(&self) -> bool {
        self.has_person.unwrap_or(false)
    }

    pub fn product(&self) -> bool {
        self.has_product.unwrap_or(false)
    }

    pub fn offer_text(&self) -> bool {
        self.has_offer_text.unwrap_or(false)
    }
}

/// `false`, `null`, `0` and `""` are false; every other value is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn advise(goal: Option<Goal>, signals: Option<&ImageSignals>) -> &'static str {
    let (Some(goal), Some(signals)) = (goal, signals) else {
        return NO_SIGNALS_ADVICE;
    };
    let person = signals.person();
    let product = signals.product();
    let offer_text = signals.offer_text();

    match goal {
        Goal::Awareness => {
            if person && !offer_text {
                "Good for awareness: showing a real person helps create emotional connection. The image isn't cluttered with promo text, so the brand vibe is clear."
            } else if !person {
                "For awareness, consider using a human or lifestyle shot. Faces and emotion help people remember the brand."
            } else {
                "Image is okay for awareness. Keep it clean, bold, and identity-focused instead of feeling like a coupon."
            }
        }
        Goal::Clicks => {
            if offer_text {
                "Great for clicks: bold promo text on the image grabs attention fast and can boost tap-through."
            } else {
                "To drive clicks, consider putting short bold text directly on the image (like 'FREE TRIAL TODAY'). That kind of visual hook stops the scroll."
            }
        }
        Goal::Conversions => {
            if product && offer_text {
                "Strong for conversions: the image shows the product and a clear offer. This helps people understand what they're buying and why to act now."
            } else if !product {
                "For conversions, show the actual product or result in the image so buyers know what they're getting."
            } else {
                "Consider adding a clear offer stamp on the image (e.g. '20% Off — Today Only'). That visual nudge can push last-second signups."
            }
        }
    }
}
