//! Markdown output formatting.

use crate::config::citations_path;
use crate::config::scholar::HOST;
use crate::models::{Author, Publication};

/// Format a list of publications as Markdown.
#[must_use]
pub fn format_publications_markdown(publications: &[Publication]) -> String {
    if publications.is_empty() {
        return "No publications found.\n".to_string();
    }

    let mut output = format!("## Publications ({})\n\n", publications.len());

    for (i, publication) in publications.iter().enumerate() {
        output.push_str(&format!("{}. **{}**", i + 1, publication.title));

        let mut meta = Vec::new();
        if let Some(year) = publication.year {
            meta.push(year.to_string());
        }
        if let Some(citedby) = publication.citedby {
            meta.push(format!("cited by {citedby}"));
        }
        if !meta.is_empty() {
            output.push_str(&format!(" ({})", meta.join(", ")));
        }
        output.push('\n');

        if let Some(authors) = &publication.authors {
            output.push_str(&format!("   {authors}\n"));
        }
        if let Some(venue) = &publication.venue {
            output.push_str(&format!("   *{venue}*\n"));
        }
    }

    output
}

/// Format an author profile as Markdown.
#[must_use]
pub fn format_author_markdown(author: &Author) -> String {
    let mut output = String::new();

    // Name
    output.push_str(&format!("# {}\n\n", author.name().unwrap_or("Unknown")));

    if let Some(affiliation) = author.affiliation() {
        output.push_str(&format!("**Affiliation**: {affiliation}\n\n"));
    }

    if let Some(email) = author.email() {
        output.push_str(&format!("**Email**: {email}\n\n"));
    }

    if let Some(interests) = author.interests() {
        if !interests.is_empty() {
            output.push_str(&format!("**Interests**: {}\n\n", interests.join(", ")));
        }
    }

    // Metrics table, only once indices are known
    if let (Some(citedby), Some(hindex), Some(i10index)) =
        (author.citedby(), author.hindex(), author.i10index())
    {
        let five = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        output.push_str("| | All | Since 5y |\n|---|---|---|\n");
        output.push_str(&format!("| Citations | {citedby} | {} |\n", five(author.citedby5y())));
        output.push_str(&format!("| h-index | {hindex} | {} |\n", five(author.hindex5y())));
        output.push_str(&format!("| i10-index | {i10index} | {} |\n\n", five(author.i10index5y())));
    } else if let Some(citedby) = author.citedby() {
        output.push_str(&format!("**Cited by**: {citedby}\n\n"));
    }

    if let Some(cites) = author.cites_per_year() {
        if !cites.is_empty() {
            let years: Vec<String> = cites.iter().map(|(y, c)| format!("{y}: {c}")).collect();
            output.push_str(&format!("**Citations per year**: {}\n\n", years.join(", ")));
        }
    }

    if let Some(coauthors) = author.coauthors() {
        output.push_str(&format!("## Co-authors ({})\n\n", coauthors.len()));
        for coauthor in coauthors {
            output.push_str(&format!("- {} [{}]", coauthor.name().unwrap_or("Unknown"), coauthor.id()));
            if let Some(affiliation) = coauthor.affiliation() {
                output.push_str(&format!(" - {affiliation}"));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    if let Some(publications) = author.publications() {
        output.push_str(&format_publications_markdown(publications));
        output.push('\n');
    }

    output.push_str(&format!("**Profile**: [View]({HOST}{})\n", citations_path(author.id())));

    output
}
