//! Trigger phrases per goal and dimension. Matching is substring containment
//! on lower-cased text, so every entry here must be lower-case.

pub const CLICKS_CTA: &[&str] = &[
    "click",
    "tap",
    "learn more",
    "sign up",
    "get started",
    "try it",
];

pub const CLICKS_URGENCY: &[&str] = &[
    "now",
    "today",
    "limited time",
    "last chance",
    "ends tonight",
    "don't miss",
];

pub const CLICKS_CURIOSITY: &[&str] = &[
    "secret",
    "you won't believe",
    "what no one tells you",
    "nobody talks about",
    "they don't want you to know",
];

pub const CONVERSIONS_BENEFIT: &[&str] = &[
    "save",
    "so you can",
    "get results",
    "improve",
    "feel better",
    "look better",
    "faster",
    "easier",
    "stress-free",
    "time-saving",
];

pub const CONVERSIONS_PROOF: &[&str] = &[
    "trusted by",
    "5-star",
    "★★★★★",
    "10,000+",
    "thousands of customers",
    "proven",
    "award-winning",
    "backed by experts",
    "clinically tested",
];

pub const CONVERSIONS_OFFER: &[&str] = &[
    "free trial",
    "free demo",
    "money-back guarantee",
    "% off",
    "off today",
    "discount",
    "risk-free",
    "no commitment",
    "limited-time offer",
];

pub const AWARENESS_BRANDING: &[&str] = &[
    "we are",
    "we're",
    "our mission",
    "our vision",
    "introducing",
    "the new",
    "official",
    "experience",
    "this is us",
];

pub const AWARENESS_EMOTIONAL: &[&str] = &[
    "premium",
    "luxury",
    "bold",
    "fearless",
    "unforgettable",
    "iconic",
    "elevate",
    "next-level",
    "redefining",
    "exclusive",
];
