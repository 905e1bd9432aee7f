//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::{Author, Publication};

/// Compact JSON for a publication; unset fields are left out.
#[must_use]
pub fn compact_publication(publication: &Publication) -> Value {
    let mut obj = json!({
        "title": publication.title,
        "source": publication.source.as_str(),
        "filled": publication.filled,
    });

    if let Some(id) = &publication.author_pub_id {
        obj["author_pub_id"] = json!(id);
    }

    if let Some(authors) = &publication.authors {
        obj["authors"] = json!(authors);
    }

    if let Some(venue) = &publication.venue {
        obj["venue"] = json!(venue);
    }

    if let Some(citedby) = publication.citedby {
        obj["citedby"] = json!(citedby);
    }

    if let Some(year) = publication.year {
        obj["year"] = json!(year);
    }

    obj
}

/// Compact JSON for an author; unset fields are left out.
#[must_use]
pub fn compact_author(author: &Author) -> Value {
    let mut obj = json!({
        "id": author.id(),
        "filled": author.filled(),
    });

    for (key, value) in [
        ("name", author.name()),
        ("affiliation", author.affiliation()),
        ("email", author.email()),
        ("url_picture", author.url_picture()),
    ] {
        if let Some(value) = value {
            obj[key] = json!(value);
        }
    }

    if let Some(interests) = author.interests() {
        obj["interests"] = json!(interests);
    }

    for (key, value) in [
        ("citedby", author.citedby()),
        ("citedby5y", author.citedby5y()),
        ("hindex", author.hindex()),
        ("hindex5y", author.hindex5y()),
        ("i10index", author.i10index()),
        ("i10index5y", author.i10index5y()),
    ] {
        if let Some(value) = value {
            obj[key] = json!(value);
        }
    }

    if let Some(cites) = author.cites_per_year() {
        obj["cites_per_year"] = json!(cites);
    }

    if let Some(coauthors) = author.coauthors() {
        obj["coauthors"] = json!(coauthors.iter().map(compact_author).collect::<Vec<_>>());
    }

    if let Some(publications) = author.publications() {
        obj["publications"] =
            json!(publications.iter().map(compact_publication).collect::<Vec<_>>());
    }

    obj
}
