// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Renders the validation errors of a small order form in two languages.
//!
//! Run with `RUST_LOG=message_box=debug` to see registry and lookup events.

use anyhow::Result;
use message_box::{
    ErrorInfo, MessageBox, MessageBoxOptions, MessageList, MessageOptions, Registry, RegistryDefaults,
};
use tracing_subscriber::EnvFilter;

const SHARED_DEFAULTS: &str = r#"
language: en
messages:
  en:
    required: "{{name}} is required"
    minNumber:
      _default: "{{name}} must be at least {{min}}"
  de:
    required: "{{name}} ist erforderlich"
    minNumber:
      _default: "{{name}} muss mindestens {{min}} sein"
"#;

const FORM_MESSAGES: &str = r#"
en:
  minNumber:
    items.$.qty: "Order at least {{min}} of item {{itemName}}"
de:
  minNumber:
    items.$.qty: "Bestellen Sie mindestens {{min}} von {{itemName}}"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    MessageBox::set_defaults(RegistryDefaults::from_yaml_str(SHARED_DEFAULTS)?);

    let mut shared: Vec<String> = Registry::global().messages().languages().cloned().collect();
    shared.sort();
    println!("📚 Shared languages: {}", shared.join(", "));

    let mut message_box = MessageBox::new(
        MessageBoxOptions::new().with_messages(MessageList::from_yaml_str(FORM_MESSAGES)?),
    );

    let errors = vec![
        ErrorInfo::new("email", "required"),
        ErrorInfo::new("items.1.qty", "minNumber")
            .with_value(0)
            .with_data("min", 1)
            .with_data("itemName", "<Widget>"),
        ErrorInfo::new("age", "minNumber").with_data("min", 18),
        ErrorInfo::new("coupon", "expired"),
        ErrorInfo::new("terms", "required").with_message("Please accept the terms"),
    ];

    let options = MessageOptions::new();
    for language in ["en", "de"] {
        message_box.set_language(language);
        println!("🌐 {}", message_box.language());
        for error in &errors {
            println!("  {:<12} {}", error.name.as_deref().unwrap_or("-"), message_box.message(error, &options)?);
        }
        println!();
    }

    match message_box.message(&errors[0], &MessageOptions::new().with_language("fr")) {
        Ok(message) => println!("fr: {}", message),
        Err(e) => eprintln!("❌ {}", e),
    }

    Ok(())
}
