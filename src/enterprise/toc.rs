// compliance-docgen/src/enterprise/toc.rs

use docx_rs::TableOfContents;

use crate::builders::{heading, page_break, para, Block, ParaStyle};
use crate::style::{colors, sizes};

/// "Table of Contents" section backed by a native ToC field over heading
/// levels 1-3. Word only computes field results when asked, so a refresh
/// note accompanies the field for readers whose editor does not update
/// fields on open. Enterprise tier only.
pub fn create_table_of_contents_section() -> Vec<Block> {
    vec![
        heading("Table of Contents", 1).into(),
        Block::Toc(TableOfContents::new().heading_styles_range(1, 3)),
        para(
            "Note: right-click the table above and choose \"Update Field\" to refresh page numbers after editing.",
            &ParaStyle {
                italics: true,
                color: Some(colors::GRAY.to_string()),
                size: Some(sizes::SMALL),
                ..Default::default()
            },
        )
        .into(),
        page_break().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_contains_a_native_toc_field() {
        let blocks = create_table_of_contents_section();
        assert!(blocks.iter().any(|b| matches!(b, Block::Toc(_))));
    }
}
