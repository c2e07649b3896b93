// compliance-docgen/src/style.rs
//
// Single source of truth for colors, page geometry, and font sizes. Every
// generator and formatting block reads from here; a change to any value
// below restyles the whole document set at once.

/// Brand palette. Hex triples without a leading '#', as consumed by docx.
pub mod colors {
    pub const PRIMARY: &str = "1F4E79";
    pub const SECONDARY: &str = "2E74B5";
    pub const DARK: &str = "17365D";
    pub const LIGHT: &str = "DEEAF6";

    pub const SUCCESS: &str = "2E7D32";
    pub const WARNING: &str = "B45309";
    pub const DANGER: &str = "C0392B";

    pub const BLACK: &str = "000000";
    pub const WHITE: &str = "FFFFFF";
    pub const GRAY_DARK: &str = "404040";
    pub const GRAY: &str = "595959";
    pub const GRAY_LIGHT: &str = "A6A6A6";
    pub const ZEBRA: &str = "F2F2F2";
    pub const RULE: &str = "BFBFBF";
}

/// Page geometry in twips (twentieths of a point; 1 inch = 1440).
/// US Letter with one-inch margins.
pub mod page {
    pub const WIDTH: u32 = 12240;
    pub const HEIGHT: u32 = 15840;
    pub const MARGIN: i32 = 1440;
    /// Usable width between the margins; all tables size against this.
    pub const CONTENT_WIDTH: usize = 9360;
}

/// Font sizes in half-points.
pub mod sizes {
    pub const TITLE: usize = 56;
    pub const SUBTITLE: usize = 32;
    pub const HEADING_1: usize = 32;
    pub const HEADING_2: usize = 26;
    pub const HEADING_3: usize = 24;
    pub const BODY: usize = 22;
    pub const SMALL: usize = 18;
    pub const TINY: usize = 16;
}

pub const BODY_FONT: &str = "Calibri";

/// Default spacing after a body paragraph, in twips.
pub const PARA_SPACING_AFTER: u32 = 200;

/// Column-width presets derived from the usable page width.
pub mod columns {
    use super::page::CONTENT_WIDTH;

    pub const TWO_EQUAL: [usize; 2] = [CONTENT_WIDTH / 2, CONTENT_WIDTH / 2];
    pub const THREE_EQUAL: [usize; 3] = [
        CONTENT_WIDTH / 3,
        CONTENT_WIDTH / 3,
        CONTENT_WIDTH / 3,
    ];
    pub const FOUR_EQUAL: [usize; 4] = [
        CONTENT_WIDTH / 4,
        CONTENT_WIDTH / 4,
        CONTENT_WIDTH / 4,
        CONTENT_WIDTH / 4,
    ];
    /// 30/70 split used by key-value tables.
    pub const NARROW: usize = CONTENT_WIDTH * 3 / 10;
    pub const WIDE: usize = CONTENT_WIDTH - NARROW;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_presets_fill_the_content_width() {
        assert_eq!(columns::TWO_EQUAL.iter().sum::<usize>(), page::CONTENT_WIDTH);
        assert_eq!(columns::THREE_EQUAL.iter().sum::<usize>(), page::CONTENT_WIDTH);
        assert_eq!(columns::FOUR_EQUAL.iter().sum::<usize>(), page::CONTENT_WIDTH);
        assert_eq!(columns::NARROW + columns::WIDE, page::CONTENT_WIDTH);
    }
}
