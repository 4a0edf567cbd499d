// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Comment retention policy for the normaliser

use bitflags::bitflags;

bitflags! {
    /// Selects which comment categories survive normalisation.
    ///
    /// Comments in a zone file fall into three categories: trailing comments
    /// on a record entry, comments inside a parenthesized multi-line group,
    /// and comments on lines of their own. Categories combine with bitwise
    /// OR; anything not selected is discarded while normalising.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CommentPolicy: u8 {
        /// Discard all comments
        const NONE = 0b0000;
        /// Keep comments trailing a record entry
        const END_OF_ENTRY = 0b0001;
        /// Keep comments found inside a `( ... )` group
        const MULTILINE = 0b0010;
        /// Keep comments on lines with no record content
        const ORPHAN = 0b0100;
        /// Keep every comment category
        const ALL = Self::END_OF_ENTRY.bits() | Self::MULTILINE.bits() | Self::ORPHAN.bits();
    }
}

impl Default for CommentPolicy {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union_of_categories() {
        assert_eq!(
            CommentPolicy::ALL,
            CommentPolicy::END_OF_ENTRY | CommentPolicy::MULTILINE | CommentPolicy::ORPHAN
        );
        assert!(CommentPolicy::ALL.contains(CommentPolicy::END_OF_ENTRY));
        assert!(CommentPolicy::ALL.contains(CommentPolicy::MULTILINE));
        assert!(CommentPolicy::ALL.contains(CommentPolicy::ORPHAN));
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(CommentPolicy::NONE, CommentPolicy::empty());
        assert_eq!(CommentPolicy::default(), CommentPolicy::NONE);
        assert!(!CommentPolicy::NONE.contains(CommentPolicy::ORPHAN));
    }
}
