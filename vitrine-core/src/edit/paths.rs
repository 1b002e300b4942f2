//! Typed field paths for document edits.
//!
//! Every editable scalar field is an enum variant, so an invalid field
//! name is a compile error (or a parse error at the CLI boundary), never a
//! silent write to nowhere.

use std::str::FromStr;

/// A scalar field of the document outside the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    BrandName,
    Hero(HeroField),
    About(AboutField),
    Contact(ContactField),
}

/// Scalar fields of the hero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroField {
    Tagline,
    Title,
    AccentTitle,
    Subtitle,
}

/// Scalar fields of the about block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AboutField {
    Subtitle,
    Title,
    Content,
}

/// Contact channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Address,
    Phone,
    Email,
    Instagram,
    InstagramDm,
}

/// Scalar fields of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    Description,
    Category,
    OrderButtonName,
    OrderUrl,
}

/// A field path that names no known field.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown field path: {0}")]
pub struct UnknownFieldPath(pub String);

impl FromStr for DocumentField {
    type Err = UnknownFieldPath;

    /// Parse paths like `brand-name`, `hero.accent-title`,
    /// `contact.instagram-dm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "brand-name" => DocumentField::BrandName,
            "hero.tagline" => DocumentField::Hero(HeroField::Tagline),
            "hero.title" => DocumentField::Hero(HeroField::Title),
            "hero.accent-title" => DocumentField::Hero(HeroField::AccentTitle),
            "hero.subtitle" => DocumentField::Hero(HeroField::Subtitle),
            "about.subtitle" => DocumentField::About(AboutField::Subtitle),
            "about.title" => DocumentField::About(AboutField::Title),
            "about.content" => DocumentField::About(AboutField::Content),
            "contact.address" => DocumentField::Contact(ContactField::Address),
            "contact.phone" => DocumentField::Contact(ContactField::Phone),
            "contact.email" => DocumentField::Contact(ContactField::Email),
            "contact.instagram" => DocumentField::Contact(ContactField::Instagram),
            "contact.instagram-dm" => DocumentField::Contact(ContactField::InstagramDm),
            other => return Err(UnknownFieldPath(other.to_string())),
        };
        Ok(field)
    }
}

impl std::fmt::Display for DocumentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentField::BrandName => write!(f, "brand-name"),
            DocumentField::Hero(HeroField::Tagline) => write!(f, "hero.tagline"),
            DocumentField::Hero(HeroField::Title) => write!(f, "hero.title"),
            DocumentField::Hero(HeroField::AccentTitle) => write!(f, "hero.accent-title"),
            DocumentField::Hero(HeroField::Subtitle) => write!(f, "hero.subtitle"),
            DocumentField::About(AboutField::Subtitle) => write!(f, "about.subtitle"),
            DocumentField::About(AboutField::Title) => write!(f, "about.title"),
            DocumentField::About(AboutField::Content) => write!(f, "about.content"),
            DocumentField::Contact(ContactField::Address) => write!(f, "contact.address"),
            DocumentField::Contact(ContactField::Phone) => write!(f, "contact.phone"),
            DocumentField::Contact(ContactField::Email) => write!(f, "contact.email"),
            DocumentField::Contact(ContactField::Instagram) => write!(f, "contact.instagram"),
            DocumentField::Contact(ContactField::InstagramDm) => {
                write!(f, "contact.instagram-dm")
            }
        }
    }
}

impl FromStr for ProductField {
    type Err = UnknownFieldPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "name" => ProductField::Name,
            "price" => ProductField::Price,
            "description" => ProductField::Description,
            "category" => ProductField::Category,
            "order-button-name" => ProductField::OrderButtonName,
            "order-url" => ProductField::OrderUrl,
            other => return Err(UnknownFieldPath(other.to_string())),
        };
        Ok(field)
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductField::Name => write!(f, "name"),
            ProductField::Price => write!(f, "price"),
            ProductField::Description => write!(f, "description"),
            ProductField::Category => write!(f, "category"),
            ProductField::OrderButtonName => write!(f, "order-button-name"),
            ProductField::OrderUrl => write!(f, "order-url"),
        }
    }
}
