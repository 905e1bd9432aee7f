//! Plain-text dump of a record, used by `Display`.
//!
//! Keys are listed alphabetically and only populated fields are shown.
//! Meant for reading, not parsing.

use crate::models::{Author, Publication};

const INDENT: usize = 2;

fn quoted(s: &str) -> String {
    format!("{s:?}")
}

fn string_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| quoted(s)).collect();
    format!("[{}]", items.join(", "))
}

/// `(key, rendered value)` pairs for an author's scalar fields, sorted by key.
fn author_scalars(author: &Author) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();

    let mut text = |key: &'static str, value: Option<&str>| {
        if let Some(value) = value {
            fields.push((key, quoted(value)));
        }
    };
    text("affiliation", author.affiliation());
    text("email", author.email());
    text("id", Some(author.id()));
    text("name", author.name());
    text("url_picture", author.url_picture());

    for (key, value) in [
        ("citedby", author.citedby()),
        ("citedby5y", author.citedby5y()),
        ("hindex", author.hindex()),
        ("hindex5y", author.hindex5y()),
        ("i10index", author.i10index()),
        ("i10index5y", author.i10index5y()),
    ] {
        if let Some(value) = value {
            fields.push((key, value.to_string()));
        }
    }

    if let Some(cites) = author.cites_per_year() {
        let pairs: Vec<String> = cites.iter().map(|(y, c)| format!("{y}: {c}")).collect();
        fields.push(("cites_per_year", format!("{{{}}}", pairs.join(", "))));
    }

    if let Some(interests) = author.interests() {
        fields.push(("interests", string_list(interests)));
    }

    fields.push(("filled", author.filled().to_string()));

    fields.sort_by_key(|(key, _)| *key);
    fields
}

fn publication_scalars(publication: &Publication) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("filled", publication.filled.to_string()),
        ("source", quoted(publication.source.as_str())),
        ("title", quoted(&publication.title)),
    ];

    if let Some(id) = &publication.author_pub_id {
        fields.push(("author_pub_id", quoted(id)));
    }
    if let Some(authors) = &publication.authors {
        fields.push(("authors", quoted(authors)));
    }
    if let Some(venue) = &publication.venue {
        fields.push(("venue", quoted(venue)));
    }
    if let Some(citedby) = publication.citedby {
        fields.push(("citedby", citedby.to_string()));
    }
    if let Some(year) = publication.year {
        fields.push(("year", year.to_string()));
    }

    fields.sort_by_key(|(key, _)| *key);
    fields
}

fn write_fields(out: &mut String, fields: &[(&'static str, String)], indent: usize) {
    for (key, value) in fields {
        out.push_str(&format!("{:indent$}{key}: {value}\n", ""));
    }
}

fn write_author(out: &mut String, author: &Author, indent: usize) {
    let scalars = author_scalars(author);
    let lists: [(&'static str, Option<usize>); 2] = [
        ("coauthors", author.coauthors().map(<[Author]>::len)),
        ("publications", author.publications().map(<[Publication]>::len)),
    ];

    // Merge nested lists into the alphabetical order of the scalars.
    let mut scalars = scalars.into_iter().peekable();
    for (list_key, len) in lists {
        while let Some((key, _)) = scalars.peek() {
            if *key > list_key {
                break;
            }
            if let Some(field) = scalars.next() {
                write_fields(out, std::slice::from_ref(&field), indent);
            }
        }

        let Some(len) = len else { continue };
        if len == 0 {
            out.push_str(&format!("{:indent$}{list_key}: []\n", ""));
            continue;
        }

        out.push_str(&format!("{:indent$}{list_key}:\n", ""));
        if list_key == "coauthors" {
            for coauthor in author.coauthors().unwrap_or_default() {
                out.push_str(&format!("{:indent$}-\n", "", indent = indent + INDENT));
                write_author(out, coauthor, indent + 2 * INDENT);
            }
        } else {
            for publication in author.publications().unwrap_or_default() {
                out.push_str(&format!("{:indent$}-\n", "", indent = indent + INDENT));
                write_fields(out, &publication_scalars(publication), indent + 2 * INDENT);
            }
        }
    }

    let rest: Vec<_> = scalars.collect();
    write_fields(out, &rest, indent);
}

/// Render every populated field of `author`.
#[must_use]
pub fn format_author_text(author: &Author) -> String {
    let mut out = String::new();
    write_author(&mut out, author, 0);
    out
}
