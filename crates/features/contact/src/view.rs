//! Server-rendered markup for the contact page.

use crate::inbox::Receipt;
use crate::model::{ContactForm, InquiryType};
use maud::{Markup, html};
use shub_kernel::domain::config::SiteConfig;
use shub_kernel::domain::constants::CONTACT_PATH;
use strum::IntoEnumIterator;

fn field_class(invalid: &[&str], name: &str) -> &'static str {
    if invalid.contains(&name) { "field invalid" } else { "field" }
}

/// The contact view: hero plus message form.
pub(crate) fn contact_view(site: &SiteConfig, form: &ContactForm, invalid: &[&str]) -> Markup {
    html! {
        section id="contact-view" {
            (hero(site))
            section class="contact-form" {
                h3 { "Send us a message" }
                @if !invalid.is_empty() {
                    div class="notice notice-error" role="alert" {
                        "Please correct the following fields: " (invalid.join(", "))
                    }
                }
                form method="post" action=(CONTACT_PATH) {
                    div class=(field_class(invalid, "name")) {
                        label for="name" { "Full Name" }
                        input id="name" name="name" type="text" value=(form.name) required;
                    }
                    div class=(field_class(invalid, "email")) {
                        label for="email" { "Email Address" }
                        input id="email" name="email" type="email" value=(form.email) required;
                    }
                    div class="field" {
                        label for="phone" { "Phone Number (Optional)" }
                        input id="phone" name="phone" type="tel" value=(form.phone);
                    }
                    div class=(field_class(invalid, "inquiry_type")) {
                        label for="inquiry_type" { "Type of Inquiry" }
                        select id="inquiry_type" name="inquiry_type" required {
                            option value="" selected[form.inquiry_type.is_empty()] disabled { "Choose one" }
                            @for inquiry in InquiryType::iter() {
                                option value=(inquiry.value())
                                    selected[form.inquiry_type == inquiry.value()] {
                                    (inquiry.label())
                                }
                            }
                        }
                    }
                    div class=(field_class(invalid, "subject")) {
                        label for="subject" { "Subject" }
                        input id="subject" name="subject" type="text" value=(form.subject) required;
                    }
                    div class=(field_class(invalid, "message")) {
                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" required
                            placeholder="Please provide details about your inquiry. For FOIA requests, include the type of records you're seeking and relevant timeframes." {
                            (form.message)
                        }
                    }
                    div class="notice notice-info" {
                        strong { "Whistleblower Inquiries" }
                        " For anonymous reporting, please use our dedicated Whistleblower Portal. This contact form is for general support questions only."
                    }
                    button type="submit" { "Send Message" }
                }
            }
        }
    }
}

/// Shown after a message was recorded.
pub(crate) fn confirmation_view(site: &SiteConfig, receipt: &Receipt) -> Markup {
    html! {
        section id="contact-view" {
            section class="contact-confirmation" {
                h2 { "Message Sent Successfully!" }
                p {
                    "Thank you for contacting " (site.app_name)
                    ". We'll get back to you within 24 hours."
                }
                p class="receipt" { "Reference: " (receipt.id) }
                a href=(CONTACT_PATH) { "Send Another Message" }
            }
        }
    }
}

fn hero(site: &SiteConfig) -> Markup {
    html! {
        section class="hero contact-hero" {
            h1 {
                span class="accent" { "Contact" }
                " the " (site.app_name) " Team"
            }
            h4 { "Get in touch with our transparency advocates" }
            p {
                "We're here to help you access government information, understand budget data, \
                 and support your civic engagement efforts. Reach out for assistance with FOIA \
                 requests, budget analysis, or reporting concerns."
            }
        }
    }
}
