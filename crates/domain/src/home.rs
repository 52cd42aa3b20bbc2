// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::section::{ArticleSection, SectionSetting, is_section_hidden};

/// A year's articles grouped by editorial section, hidden sections removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeData {
    pub utkarshi: Vec<Article>,
    pub abohoman: Vec<Article>,
    pub prayukti: Vec<Article>,
    pub sarvagya: Vec<Article>,
}

impl HomeData {
    /// Groups `articles` by section, keeping their order and dropping
    /// articles whose section is hidden in `settings`.
    #[must_use]
    pub fn assemble(articles: Vec<Article>, settings: &[SectionSetting]) -> Self {
        let mut data: Self = Self::default();
        for article in articles {
            if is_section_hidden(settings, article.section.section_key()) {
                continue;
            }
            data.section_mut(article.section).push(article);
        }
        data
    }

    #[must_use]
    pub fn section(&self, section: ArticleSection) -> &[Article] {
        match section {
            ArticleSection::Utkarshi => &self.utkarshi,
            ArticleSection::Abohoman => &self.abohoman,
            ArticleSection::Prayukti => &self.prayukti,
            ArticleSection::Sarvagya => &self.sarvagya,
        }
    }

    const fn section_mut(&mut self, section: ArticleSection) -> &mut Vec<Article> {
        match section {
            ArticleSection::Utkarshi => &mut self.utkarshi,
            ArticleSection::Abohoman => &mut self.abohoman,
            ArticleSection::Prayukti => &mut self.prayukti,
            ArticleSection::Sarvagya => &mut self.sarvagya,
        }
    }
}

/// The current year together with its aggregated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentYearData {
    pub current_year: i32,
    pub data: HomeData,
}
