// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use numisma_core::index::{TypedIndex, TypedIndexTag};

/// A tag type for pocket indices (a position within a slot).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PocketIndexTag;

impl TypedIndexTag for PocketIndexTag {
    const NAME: &'static str = "PocketIndex";
}

/// A typed index for pockets within a slot.
pub type PocketIndex = TypedIndex<PocketIndexTag>;

/// A tag type for slot indices (a position within a page).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SlotIndexTag;

impl TypedIndexTag for SlotIndexTag {
    const NAME: &'static str = "SlotIndex";
}

/// A typed index for slots within a page.
pub type SlotIndex = TypedIndex<SlotIndexTag>;

/// A tag type for page indices (a position within a book).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PageIndexTag;

impl TypedIndexTag for PageIndexTag {
    const NAME: &'static str = "PageIndex";
}

/// A typed index for pages within a book.
pub type PageIndex = TypedIndex<PageIndexTag>;
