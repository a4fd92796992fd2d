//! SAML auto-submit form scraping.
//!
//! After the second factor is accepted the SSO answers with a page whose only
//! job is to POST a `SAMLResponse` back to the identity broker. The expected
//! shape is:
//!
//! ```html
//! <html><body>
//!   <form action="https://broker/saml2/idpresponse" method="post">
//!     <div>
//!       <input type="hidden" name="RelayState" value="..."/>
//!       <input type="hidden" name="SAMLResponse" value="..."/>
//!     </div>
//!   </form>
//! </body></html>
//! ```
//!
//! Only direct children are followed, so a form nested deeper in the page is
//! not picked up.

use scraper::{ElementRef, Html};
use thiserror::Error;

/// Fields of the SAML auto-submit form.
#[derive(Clone, PartialEq, Eq)]
pub struct IdpFormPayload {
    pub action: String,
    pub relay_state: String,
    pub saml_response: String,
}

impl std::fmt::Debug for IdpFormPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdpFormPayload")
            .field("action", &self.action)
            .field("relay_state", &"<redacted>")
            .field("saml_response", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamlFormError {
    #[error("no form element under html > body")]
    MissingForm,
    #[error("form has no action attribute")]
    MissingAction,
    #[error("form has no div child")]
    MissingContainer,
    #[error("no input named {0} with a value")]
    MissingInput(&'static str),
}

/// Extract the SAML form payload from an HTML document.
pub fn parse_idp_form(html: &str) -> Result<IdpFormPayload, SamlFormError> {
    let document = Html::parse_document(html);
    let root = document.root_element();
    if root.value().name() != "html" {
        return Err(SamlFormError::MissingForm);
    }

    let form = first_child(root, "body")
        .and_then(|body| first_child(body, "form"))
        .ok_or(SamlFormError::MissingForm)?;
    let action = form.value().attr("action").ok_or(SamlFormError::MissingAction)?;

    let container = first_child(form, "div").ok_or(SamlFormError::MissingContainer)?;
    let input_value = |name: &'static str| {
        children_named(container, "input")
            .find(|input| input.value().attr("name") == Some(name))
            .and_then(|input| input.value().attr("value"))
            .ok_or(SamlFormError::MissingInput(name))
    };

    Ok(IdpFormPayload {
        action: action.to_string(),
        relay_state: input_value("RelayState")?.to_string(),
        saml_response: input_value("SAMLResponse")?.to_string(),
    })
}

fn children_named<'a>(
    parent: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent.children().filter_map(ElementRef::wrap).filter(move |el| el.value().name() == tag)
}

fn first_child<'a>(parent: ElementRef<'a>, tag: &'static str) -> Option<ElementRef<'a>> {
    children_named(parent, tag).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Redirecting</title></head>
  <body onload="document.forms[0].submit()">
    <noscript><p>Press Continue</p></noscript>
    <form action="https://uoapool.auth.example/saml2/idpresponse" method="post">
      <div>
        <input type="hidden" name="RelayState" value="relay-123"/>
        <input type="hidden" name="SAMLResponse" value="PHNhbWw+"/>
      </div>
      <noscript><div><input type="submit" value="Continue"/></div></noscript>
    </form>
  </body>
</html>"#;

    #[test]
    fn extracts_action_and_inputs() {
        let payload = parse_idp_form(FORM).unwrap();

        assert_eq!(payload.action, "https://uoapool.auth.example/saml2/idpresponse");
        assert_eq!(payload.relay_state, "relay-123");
        assert_eq!(payload.saml_response, "PHNhbWw+");
    }

    #[test]
    fn decodes_entities_in_values() {
        let html = FORM.replace("relay-123", "a&amp;b");
        assert_eq!(parse_idp_form(&html).unwrap().relay_state, "a&b");
    }

    #[test]
    fn missing_saml_response_is_reported() {
        let html = FORM.replace(r#"name="SAMLResponse""#, r#"name="Other""#);
        assert_eq!(parse_idp_form(&html), Err(SamlFormError::MissingInput("SAMLResponse")));
    }

    #[test]
    fn missing_action_is_reported() {
        let html = FORM.replace(r#"action="https://uoapool.auth.example/saml2/idpresponse" "#, "");
        assert_eq!(parse_idp_form(&html), Err(SamlFormError::MissingAction));
    }

    #[test]
    fn form_must_be_a_direct_child_of_body() {
        let html = FORM.replace("<form", "<section><form").replace("</form>", "</form></section>");
        assert_eq!(parse_idp_form(&html), Err(SamlFormError::MissingForm));
    }

    #[test]
    fn inputs_must_sit_in_the_first_div() {
        let first_input = "<div>\n        <input type=\"hidden\" name=\"RelayState\"";
        let html = FORM.replace(first_input, &format!("<div></div>{first_input}"));
        assert_eq!(parse_idp_form(&html), Err(SamlFormError::MissingInput("RelayState")));
    }

    #[test]
    fn login_error_page_has_no_form() {
        let html = "<html><body><p>Incorrect token</p></body></html>";
        assert_eq!(parse_idp_form(html), Err(SamlFormError::MissingForm));
    }
}
