//! Pure, synchronous edits over the site document.
//!
//! Every operation takes the current document by reference and returns a
//! new one; the input is never mutated, so consumers holding the previous
//! value (or relying on reference identity for change detection) keep a
//! consistent snapshot. Operations are total: an unknown product id or an
//! out-of-range index returns the document unchanged rather than failing
//! the editing surface.

mod paths;

pub use paths::{
    AboutField, ContactField, DocumentField, HeroField, ProductField, UnknownFieldPath,
};

use vitrine_sdk::objects::{MediaReference, Product, SiteDocument};

/// Replace one scalar field outside the product list.
pub fn set_field(
    doc: &SiteDocument,
    field: DocumentField,
    value: impl Into<String>,
) -> SiteDocument {
    let mut next = doc.clone();
    let value = value.into();
    match field {
        DocumentField::BrandName => next.brand_name = value,
        DocumentField::Hero(HeroField::Tagline) => next.hero.tagline = value,
        DocumentField::Hero(HeroField::Title) => next.hero.title = value,
        DocumentField::Hero(HeroField::AccentTitle) => next.hero.accent_title = value,
        DocumentField::Hero(HeroField::Subtitle) => next.hero.subtitle = value,
        DocumentField::About(AboutField::Subtitle) => next.about.subtitle = value,
        DocumentField::About(AboutField::Title) => next.about.title = value,
        DocumentField::About(AboutField::Content) => next.about.content = value,
        DocumentField::Contact(ContactField::Address) => next.contact.address = value,
        DocumentField::Contact(ContactField::Phone) => next.contact.phone = value,
        DocumentField::Contact(ContactField::Email) => next.contact.email = value,
        DocumentField::Contact(ContactField::Instagram) => next.contact.instagram = value,
        DocumentField::Contact(ContactField::InstagramDm) => next.contact.instagram_dm = value,
    }
    next
}

/// Replace the hero background image.
pub fn set_hero_background(doc: &SiteDocument, media: MediaReference) -> SiteDocument {
    let mut next = doc.clone();
    next.hero.background_image = media;
    next
}

/// Replace the about-section image.
pub fn set_about_image(doc: &SiteDocument, media: MediaReference) -> SiteDocument {
    let mut next = doc.clone();
    next.about.image = media;
    next
}

/// Append an empty product with a fresh unique id.
///
/// Returns the new document and the generated id. The product lands at
/// the end of the list (highest display order).
pub fn add_product(doc: &SiteDocument) -> (SiteDocument, String) {
    let mut next = doc.clone();
    let product = Product::new();
    let id = product.id.clone();
    next.products.push(product);
    (next, id)
}

/// Delete the product with this id; a no-op if absent. Other products
/// keep their ids and relative order.
pub fn remove_product(doc: &SiteDocument, id: &str) -> SiteDocument {
    let mut next = doc.clone();
    next.products.retain(|p| p.id != id);
    next
}

/// Replace one scalar field of the named product.
pub fn update_product(
    doc: &SiteDocument,
    id: &str,
    field: ProductField,
    value: impl Into<String>,
) -> SiteDocument {
    let value = value.into();
    with_product(doc, id, |product| match field {
        ProductField::Name => product.name = value,
        ProductField::Price => product.price = value,
        ProductField::Description => product.description = value,
        ProductField::Category => product.category = value,
        ProductField::OrderButtonName => product.order_button_name = value,
        ProductField::OrderUrl => product.order_url = value,
    })
}

/// Append a detail tag. Empty or whitespace-only text is ignored;
/// otherwise the text is stored exactly as given.
pub fn add_detail(doc: &SiteDocument, id: &str, text: &str) -> SiteDocument {
    if text.trim().is_empty() {
        return doc.clone();
    }
    with_product(doc, id, |product| product.details.push(text.to_string()))
}

/// Remove the detail at `index`; out of range is a no-op.
pub fn remove_detail(doc: &SiteDocument, id: &str, index: usize) -> SiteDocument {
    with_product(doc, id, |product| {
        if index < product.details.len() {
            product.details.remove(index);
        }
    })
}

/// Append media references in the order supplied.
pub fn add_media(doc: &SiteDocument, id: &str, refs: Vec<MediaReference>) -> SiteDocument {
    with_product(doc, id, |product| product.media.extend(refs))
}

/// Remove the media item at `index`; out of range is a no-op.
pub fn remove_media(doc: &SiteDocument, id: &str, index: usize) -> SiteDocument {
    with_product(doc, id, |product| {
        if index < product.media.len() {
            product.media.remove(index);
        }
    })
}

fn with_product<F>(doc: &SiteDocument, id: &str, apply: F) -> SiteDocument
where
    F: FnOnce(&mut Product),
{
    let mut next = doc.clone();
    if let Some(product) = next.products.iter_mut().find(|p| p.id == id) {
        apply(product);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::objects::MediaKind;

    fn acme() -> SiteDocument {
        SiteDocument {
            brand_name: "Acme".to_string(),
            ..SiteDocument::default()
        }
    }

    fn image(url: &str) -> MediaReference {
        MediaReference {
            url: url.to_string(),
            kind: MediaKind::Image,
        }
    }

    #[test]
    fn test_set_field_touches_only_the_named_field() {
        let doc = acme();
        let next = set_field(
            &doc,
            DocumentField::Hero(HeroField::AccentTitle),
            "Jewellery",
        );
        assert_eq!(next.hero.accent_title, "Jewellery");
        assert_eq!(next.brand_name, "Acme");
        // The input document is untouched.
        assert_eq!(doc.hero.accent_title, "");
    }

    #[test]
    fn test_add_then_remove_product_restores_sequence() {
        let (with_one, first_id) = add_product(&acme());
        let (with_two, second_id) = add_product(&with_one);
        assert_ne!(first_id, second_id);

        let back = remove_product(&with_two, &second_id);
        assert_eq!(back, with_one);
    }

    #[test]
    fn test_new_product_lands_last_with_defaults() {
        let (with_one, _) = add_product(&acme());
        let (with_two, id) = add_product(&with_one);

        let last = with_two.products.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "");
        assert_eq!(last.order_button_name, "Order Now");
        assert!(last.media.is_empty());
    }

    #[test]
    fn test_update_product_changes_one_field() {
        let (doc, id) = add_product(&acme());
        let next = update_product(&doc, &id, ProductField::Name, "Ring A");

        let product = next.products.iter().find(|p| p.id == id).unwrap();
        assert_eq!(product.name, "Ring A");
        assert_eq!(product.price, "");
        assert_eq!(product.category, "");
        assert_eq!(product.order_button_name, "Order Now");
    }

    #[test]
    fn test_unknown_product_id_is_a_no_op() {
        let (doc, _) = add_product(&acme());
        assert_eq!(update_product(&doc, "prod_missing", ProductField::Name, "x"), doc);
        assert_eq!(remove_product(&doc, "prod_missing"), doc);
        assert_eq!(add_detail(&doc, "prod_missing", "tag"), doc);
        assert_eq!(add_media(&doc, "prod_missing", vec![image("http://x/a.png")]), doc);
    }

    #[test]
    fn test_detail_add_then_remove_restores_empty() {
        let (doc, id) = add_product(&acme());
        let with_detail = add_detail(&doc, &id, "24k gold plated");
        assert_eq!(
            with_detail.products[0].details,
            vec!["24k gold plated".to_string()]
        );

        let back = remove_detail(&with_detail, &id, 0);
        assert!(back.products[0].details.is_empty());
        assert_eq!(back, doc);
    }

    #[test]
    fn test_blank_detail_is_rejected() {
        let (doc, id) = add_product(&acme());
        assert_eq!(add_detail(&doc, &id, ""), doc);
        assert_eq!(add_detail(&doc, &id, "   "), doc);
        assert_eq!(add_detail(&doc, &id, "\t\n"), doc);
    }

    #[test]
    fn test_duplicate_details_are_allowed() {
        let (doc, id) = add_product(&acme());
        let next = add_detail(&add_detail(&doc, &id, "gold"), &id, "gold");
        assert_eq!(next.products[0].details, vec!["gold", "gold"]);
    }

    #[test]
    fn test_media_appends_preserve_order() {
        let (doc, id) = add_product(&acme());
        let first = add_media(&doc, &id, vec![image("http://x/a.png")]);
        let second = add_media(
            &first,
            &id,
            vec![MediaReference {
                url: "http://x/b.mp4".to_string(),
                kind: MediaKind::Video,
            }],
        );

        let media = &second.products[0].media;
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].url, "http://x/a.png");
        assert_eq!(media[0].kind, MediaKind::Image);
        assert_eq!(media[1].url, "http://x/b.mp4");
        assert_eq!(media[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_remove_media_out_of_range_is_a_no_op() {
        let (doc, id) = add_product(&acme());
        let with_media = add_media(&doc, &id, vec![image("http://x/a.png")]);
        assert_eq!(remove_media(&with_media, &id, 5), with_media);
        assert_eq!(remove_detail(&with_media, &id, 0), with_media);
    }

    #[test]
    fn test_block_images_replace_wholesale() {
        let doc = acme();
        let next = set_hero_background(&doc, image("https://cdn/h.png"));
        assert_eq!(next.hero.background_image.url, "https://cdn/h.png");
        assert_eq!(doc.hero.background_image.url, "");

        let next = set_about_image(&next, image("https://cdn/a.png"));
        assert_eq!(next.about.image.url, "https://cdn/a.png");
    }
}
