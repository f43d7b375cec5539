use folio_core::{ContactForm, CONTACT_SENT_MESSAGE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::CONTACT_FORM_ID;
use crate::dom;
use crate::toast::Toast;

/// Validate `#contactForm` on submit and report through the toast.
/// Nothing is sent anywhere; a valid form is simply reset.
pub fn wire(document: &web::Document, toast: Toast) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let f = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let fields = match read_fields(&f) {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("[contact] could not read form: {:?}", e);
                return;
            }
        };
        match fields.validate() {
            Ok(()) => {
                toast.show(CONTACT_SENT_MESSAGE);
                f.reset();
            }
            Err(e) => toast.show(&e.to_string()),
        }
    });
}

fn read_fields(form: &web::HtmlFormElement) -> Result<ContactForm, JsValue> {
    let data = web::FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactForm {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    })
}
