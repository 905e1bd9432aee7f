//! Shared fixtures: a counting stub fetcher and profile-page builders.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use scholar_profile::DocumentFetcher;
use scholar_profile::error::{ClientError, ClientResult};

/// Serves canned pages by path and records every request.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(path.into(), html.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl DocumentFetcher for StubFetcher {
    async fn fetch_page(&self, path: &str) -> ClientResult<String> {
        self.requests.lock().unwrap().push(path.to_string());
        self.pages.get(path).cloned().ok_or_else(|| ClientError::not_found(path))
    }
}

pub fn first_page(id: &str) -> String {
    format!("/citations?hl=en&user={id}&pagesize=100")
}

pub fn later_page(id: &str, cstart: usize) -> String {
    format!("/citations?hl=en&user={id}&cstart={cstart}&pagesize=100")
}

/// Builder for a profile page.
#[derive(Clone)]
pub struct ProfilePage {
    pub name: Option<&'static str>,
    pub affiliation: &'static str,
    pub interests: Vec<&'static str>,
    pub indices: Option<[u64; 6]>,
    pub years: Vec<i32>,
    pub counts: Vec<u64>,
    pub coauthors: Vec<(&'static str, &'static str, &'static str)>,
    pub rows: Vec<&'static str>,
    pub more: Option<bool>,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self {
            name: Some("Steven A. Cholewiak, PhD"),
            affiliation: "Vision Scientist",
            interests: vec!["Depth Cues", "3D Shape"],
            indices: Some([262, 186, 8, 8, 7, 7]),
            years: vec![2019, 2020],
            counts: vec![40, 61],
            coauthors: vec![
                (
                    "ruUKktgAAAAJ",
                    "Roland Fleming",
                    "Kurt Koffka Professor of Experimental Psychology, University of Giessen",
                ),
                ("Smr99uEAAAAJ", "Martin Banks", "Professor of Vision Science, UC Berkeley"),
            ],
            rows: vec!["Shape from texture", "Perceived depth"],
            more: Some(false),
        }
    }
}

impl ProfilePage {
    /// Page carrying only the publication table and button.
    pub fn rows_only(rows: Vec<&'static str>, more: bool) -> Self {
        Self {
            name: None,
            interests: vec![],
            indices: None,
            years: vec![],
            counts: vec![],
            coauthors: vec![],
            rows,
            more: Some(more),
            ..Self::default()
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<html><head><title>Profile</title></head><body>");

        if let Some(name) = self.name {
            html.push_str(&format!(r#"<div id="gsc_prf_in">{name}</div>"#));
            html.push_str(&format!(r#"<div class="gsc_prf_il">{}</div>"#, self.affiliation));
            html.push_str(r#"<div class="gsc_prf_il" id="gsc_prf_ivh">Verified email at berkeley.edu</div>"#);
            html.push_str(r#"<div class="gsc_prf_il" id="gsc_prf_int">"#);
            for interest in &self.interests {
                html.push_str(&format!(r##"<a href="#" class="gsc_prf_inta gs_ibl">{interest}</a>"##));
            }
            html.push_str("</div>");
        }

        if let Some(indices) = self.indices {
            html.push_str(r#"<table id="gsc_rsb_st"><tbody>"#);
            for pair in indices.chunks(2) {
                html.push_str(&format!(
                    r#"<tr><td class="gsc_rsb_sc1">x</td><td class="gsc_rsb_std">{}</td><td class="gsc_rsb_std">{}</td></tr>"#,
                    pair[0], pair[1]
                ));
            }
            html.push_str("</tbody></table>");
        }

        html.push_str(r#"<div class="gsc_md_hist_b">"#);
        for year in &self.years {
            html.push_str(&format!(r#"<span class="gsc_g_t">{year}</span>"#));
        }
        for count in &self.counts {
            html.push_str(&format!(r##"<a href="#" class="gsc_g_a"><span class="gsc_g_al">{count}</span></a>"##));
        }
        html.push_str("</div>");

        html.push_str(r#"<ul class="gsc_rsb_a">"#);
        for (id, name, affiliation) in &self.coauthors {
            html.push_str(&format!(
                r#"<li><div class="gsc_rsb_aa">
                    <img class="gs_pp_df" src="/citations?view_op=small_photo&amp;user={id}">
                    <span class="gsc_rsb_a_desc">
                        <a tabindex="-1" href="/citations?user={id}&amp;hl=en">{name}</a>
                        <span class="gsc_rsb_a_ext">{affiliation}</span>
                    </span>
                </div></li>"#
            ));
        }
        html.push_str("</ul>");

        html.push_str(r#"<table id="gsc_a_t"><tbody id="gsc_a_b">"#);
        for (i, title) in self.rows.iter().enumerate() {
            html.push_str(&format!(
                r#"<tr class="gsc_a_tr">
                    <td class="gsc_a_t">
                        <a href="/citations?view_op=view_citation&amp;user=4bahYMkAAAAJ&amp;citation_for_view=4bahYMkAAAAJ:pub{i}" class="gsc_a_at">{title}</a>
                        <div class="gs_gray">SA Cholewiak</div>
                        <div class="gs_gray">Journal of Vision</div>
                    </td>
                    <td class="gsc_a_c"><a class="gsc_a_ac gs_ibl">{cites}</a></td>
                    <td class="gsc_a_y"><span class="gsc_a_h gsc_a_hc gs_ibl">2015</span></td>
                </tr>"#,
                cites = i + 1
            ));
        }
        html.push_str("</tbody></table>");

        match self.more {
            Some(true) => html.push_str(r#"<button type="button" id="gsc_bpf_more">Show more</button>"#),
            Some(false) => html.push_str(
                r#"<button type="button" id="gsc_bpf_more" disabled="">Show more</button>"#,
            ),
            None => {}
        }

        html.push_str("</body></html>");
        html
    }
}

/// One search-result entry, as shown on the author search page.
pub fn search_entry(email: Option<&str>, cited_by: Option<&str>) -> String {
    let email = email
        .map(|e| format!(r#"<div class="gs_ai_eml">{e}</div>"#))
        .unwrap_or_default();
    let cited_by = cited_by
        .map(|c| format!(r#"<div class="gs_ai_cby">{c}</div>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="gsc_1usr">
            <div class="gs_ai gs_scl gs_ai_chpr">
                <a href="/citations?hl=en&amp;user=4bahYMkAAAAJ" class="gs_ai_pho"><span class="gs_rimg gs_pp_sm"><img alt="" src="x.jpg"></span></a>
                <div class="gs_ai_t">
                    <h3 class="gs_ai_name"><a href="/citations?hl=en&amp;user=4bahYMkAAAAJ">Steven A. Cholewiak, PhD</a></h3>
                    <div class="gs_ai_aff">Vision Scientist</div>
                    {email}
                    {cited_by}
                    <div class="gs_ai_int">
                        <a class="gs_ai_one_int" href="/citations?view_op=search_authors&amp;mauthors=label:depth_cues">Depth Cues</a>
                        <a class="gs_ai_one_int" href="/citations?view_op=search_authors&amp;mauthors=label:3d_shape">3D Shape</a>
                    </div>
                </div>
            </div>
        </div>"#
    )
}
