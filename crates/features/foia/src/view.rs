//! Server-rendered markup for the FOIA toolkit page.

use crate::catalog::{FAQS, PROCESS_STEPS, TEMPLATES};
use crate::letter::{Agency, LetterForm, PreferredFormat, RequestType};
use maud::{Markup, html};
use shub_kernel::domain::config::SiteConfig;
use shub_kernel::domain::constants::CONTACT_PATH;
use strum::IntoEnumIterator;

const LETTER_PATH: &str = "/foia/letter";

fn field_class(invalid: &[&str], name: &str) -> &'static str {
    if invalid.contains(&name) { "field invalid" } else { "field" }
}

/// The FOIA toolkit view: hero, resources, request generator, steps, FAQ.
pub(crate) fn foia_view(site: &SiteConfig, form: &LetterForm, invalid: &[&str]) -> Markup {
    html! {
        section id="foia-view" {
            (hero())
            section class="foia-templates" {
                h2 { "FOIA Templates & Resources" }
                div class="card-grid" {
                    @for template in TEMPLATES {
                        article class="card" {
                            h4 { (template.title) }
                            p class="meta" { (template.format) " • " (template.category.label()) }
                            p { (template.description) }
                            a class="button" href=(template.link) download { "Download" }
                        }
                    }
                }
            }
            (request_form(form, invalid))
            section class="foia-steps" {
                h2 { "How the Process Works" }
                ol {
                    @for step in PROCESS_STEPS {
                        li { (step) }
                    }
                }
            }
            section class="foia-faq" {
                h2 { "Frequently Asked Questions" }
                @for faq in FAQS {
                    details {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
            section class="foia-help" {
                h3 { "Need Help with Your FOIA Request?" }
                p {
                    "Our team can help you navigate the FOIA process and ensure your request is \
                     properly formatted."
                }
                a class="button" href=(CONTACT_PATH) { "Contact Support" }
                a class="button outline" href="/downloads/foia-complete-guide.pdf" download {
                    "Download Complete Guide"
                }
                p class="fineprint" { "Questions? " (site.support_email) }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section class="hero foia-hero" {
            h1 { "Freedom of Information Toolkit" }
            p {
                "Virginia's Freedom of Information Act ensures your right to access government \
                 records. Use these tools to request public documents, understand the process, \
                 and hold your government accountable."
            }
        }
    }
}

fn request_form(form: &LetterForm, invalid: &[&str]) -> Markup {
    html! {
        section class="foia-request-form" {
            h2 { "FOIA Request Generator" }
            @if !invalid.is_empty() {
                div class="notice notice-error" role="alert" {
                    "Please correct the following fields: " (invalid.join(", "))
                }
            }
            form method="post" action=(LETTER_PATH) {
                div class=(field_class(invalid, "request_type")) {
                    label for="request_type" { "Type of Request" }
                    select id="request_type" name="request_type" required {
                        option value="" selected[form.request_type.is_empty()] disabled { "Choose one" }
                        @for request_type in RequestType::iter() {
                            option value=(request_type.value())
                                selected[form.request_type == request_type.value()] {
                                (request_type.label())
                            }
                        }
                    }
                }
                div class=(field_class(invalid, "records_description")) {
                    label for="records_description" { "Describe the records you're seeking" }
                    textarea id="records_description" name="records_description" rows="4" required
                        placeholder="Be as specific as possible about the records you need..." {
                        (form.records_description)
                    }
                }
                div class="field" {
                    label for="timeframe" { "Time Frame" }
                    input id="timeframe" name="timeframe" type="text" value=(form.timeframe)
                        placeholder="e.g., January 2023 - December 2023";
                }
                div class=(field_class(invalid, "agency")) {
                    label for="agency" { "Government Agency" }
                    select id="agency" name="agency" required {
                        option value="" selected[form.agency.is_empty()] disabled { "Choose one" }
                        @for agency in Agency::iter() {
                            option value=(agency.value()) selected[form.agency == agency.value()] {
                                (agency.label())
                            }
                        }
                    }
                }
                div class=(field_class(invalid, "contact_name")) {
                    label for="contact_name" { "Your Name" }
                    input id="contact_name" name="contact_name" type="text"
                        value=(form.contact_name) required;
                }
                div class=(field_class(invalid, "contact_email")) {
                    label for="contact_email" { "Email Address" }
                    input id="contact_email" name="contact_email" type="email"
                        value=(form.contact_email) required;
                }
                div class="field" {
                    label for="contact_phone" { "Phone Number (Optional)" }
                    input id="contact_phone" name="contact_phone" type="tel"
                        value=(form.contact_phone);
                }
                div class=(field_class(invalid, "preferred_format")) {
                    label for="preferred_format" { "Preferred Format" }
                    select id="preferred_format" name="preferred_format" {
                        @for format in PreferredFormat::iter() {
                            option value=(format.value())
                                selected[form.preferred_format == format.value()] {
                                (format.label())
                            }
                        }
                    }
                }
                button type="submit" { "Generate Request Letter" }
            }
        }
    }
}
