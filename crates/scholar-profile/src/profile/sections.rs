//! Parsers for the single-page sections: basics, indices and counts.

use crate::error::{ProfileError, ProfileResult};
use crate::extract::{ProfileDocument, SelectorTable, text_of};
use crate::models::{Author, CitesPerYear};

/// Number of cells in the citation statistics table.
const INDEX_CELLS: usize = 6;

fn parse_number<T: std::str::FromStr>(field: &'static str, text: String) -> ProfileResult<T> {
    text.parse().map_err(|_| ProfileError::invalid_number(field, text))
}

/// Overwrite name, affiliation and interests from the profile header.
pub fn parse_basics(
    document: &ProfileDocument,
    selectors: &SelectorTable,
    author: &mut Author,
) -> ProfileResult<()> {
    let name = document.require(selectors.profile_name)?;
    author.name = Some(text_of(&name));

    let affiliation = document.require(selectors.profile_affiliation)?;
    author.affiliation = Some(text_of(&affiliation));

    let interests = document.select_all(selectors.profile_interests)?;
    author.interests = Some(interests.iter().map(text_of).collect());

    Ok(())
}

/// Read the six citation metrics.
///
/// A page without the statistics table (no publications yet) yields zeros.
pub fn parse_indices(
    document: &ProfileDocument,
    selectors: &SelectorTable,
    author: &mut Author,
) -> ProfileResult<()> {
    let cells = document.select_all(selectors.index_cells)?;

    let values: [u64; INDEX_CELLS] = if cells.is_empty() {
        [0; INDEX_CELLS]
    } else {
        if cells.len() < INDEX_CELLS {
            return Err(ProfileError::missing(format!(
                "{} (expected {INDEX_CELLS} cells, found {})",
                selectors.index_cells,
                cells.len()
            )));
        }

        const FIELDS: [&str; INDEX_CELLS] =
            ["citedby", "citedby5y", "hindex", "hindex5y", "i10index", "i10index5y"];

        let mut values = [0; INDEX_CELLS];
        for ((value, cell), field) in values.iter_mut().zip(&cells).zip(FIELDS) {
            *value = parse_number(field, text_of(cell))?;
        }
        values
    };

    let [citedby, citedby5y, hindex, hindex5y, i10index, i10index5y] = values;
    author.citedby = Some(citedby);
    author.citedby5y = Some(citedby5y);
    author.hindex = Some(hindex);
    author.hindex5y = Some(hindex5y);
    author.i10index = Some(i10index);
    author.i10index5y = Some(i10index5y);

    Ok(())
}

/// Pair the histogram's year labels with its bar values.
///
/// Pairing is positional; extra labels or values are dropped.
pub fn parse_counts(
    document: &ProfileDocument,
    selectors: &SelectorTable,
    author: &mut Author,
) -> ProfileResult<()> {
    let years = document
        .select_all(selectors.year_labels)?
        .iter()
        .map(|el| parse_number::<i32>("year", text_of(el)))
        .collect::<ProfileResult<Vec<_>>>()?;

    let counts = document
        .select_all(selectors.year_counts)?
        .iter()
        .map(|el| parse_number::<u64>("citations per year", text_of(el)))
        .collect::<ProfileResult<Vec<_>>>()?;

    author.cites_per_year = Some(CitesPerYear::from_pairs(years, counts));

    Ok(())
}
