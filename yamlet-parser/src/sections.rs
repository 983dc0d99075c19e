//! Section tree: the raw line hierarchy
//!
//!     Before any line is interpreted as a key, value or attribute, the reader arranges the
//!     content lines into a tree purely from their indentation. Each node of that tree is a
//!     [Section]: one trimmed line plus its indentation. Blank lines take part like any
//!     other line and produce sections with empty content. Sections live only for the duration
//!     of one decode and are discarded once [building](crate::building) has turned them into
//!     a Document Tree.
//!
//! Storage
//!
//!     Sections are stored in an arena ([SectionTree]) and refer to each other by
//!     [SectionId]. The arena owns every section; a section lists its children by id and keeps
//!     its parent as a plain id, so there is exactly one owner and back references cannot
//!     keep anything alive. Index 0 is always the synthetic root: empty content, indentation 0.
//!
//! Indentation Inference
//!
//!     [SectionBuilder] is the state machine that places each line. It keeps a cursor stack
//!     (the path from the root to the section new lines are appended to) and the indentation
//!     of the previous content line. For a line at indentation `current`:
//!
//!         1. current < last: pop `(last - current) / 2` levels, never past the root.
//!         2. current > last: push `(current - last) / 2 - 1` empty filler sections, each a
//!            child of the cursor, so jumps of several levels still nest one level at a time.
//!         3. current - last == 2: descend into the cursor's most recent child, which makes the
//!            previous line the parent of this one.
//!         4. Append the line as a child of the cursor and remember `current` as `last`.
//!
//!     A one-level increase with no previous sibling to descend into (the very first line, or
//!     a line right after the root was re-entered) leaves the cursor where it is.
//!
//!     Example:
//!
//!     ```text
//!     stats:          0   root ─ stats
//!       hp: 10        2          └─ hp
//!           deep: 1   6              └─ (filler) ─ deep
//!     name: hero      0   root ─ name
//!     ```

use tracing::trace;

/// Absolute indentation units per nesting level
pub const INDENT_WIDTH: usize = 2;

/// Index of a section inside its [SectionTree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

impl SectionId {
    pub const ROOT: SectionId = SectionId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// One line of the raw hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed line text; empty for the root and for fillers
    pub content: String,
    pub indentation: usize,
    /// The line began with a sequence marker
    pub sequence_item: bool,
    pub parent: Option<SectionId>,
    pub children: Vec<SectionId>,
}

impl Section {
    fn new(content: String, indentation: usize, sequence_item: bool, parent: SectionId) -> Self {
        Self {
            content,
            indentation,
            sequence_item,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Carries no text of its own: a filler bridging an indentation jump, or a blank line
    pub fn is_filler(&self) -> bool {
        self.parent.is_some() && self.content.is_empty() && !self.sequence_item
    }
}

/// Arena holding a whole section hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTree {
    sections: Vec<Section>,
}

impl SectionTree {
    pub fn new() -> Self {
        Self {
            sections: vec![Section {
                content: String::new(),
                indentation: 0,
                sequence_item: false,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> &Section {
        &self.sections[SectionId::ROOT.0]
    }

    pub fn get(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    pub fn children(&self, id: SectionId) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections[id.0]
            .children
            .iter()
            .map(move |&child| (child, &self.sections[child.0]))
    }

    pub fn last_child(&self, id: SectionId) -> Option<SectionId> {
        self.sections[id.0].children.last().copied()
    }

    /// Total number of sections, the synthetic root included
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.len() == 1
    }

    fn append(&mut self, parent: SectionId, section: Section) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(section);
        self.sections[parent.0].children.push(id);
        id
    }
}

impl Default for SectionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// The indentation state machine that grows a [SectionTree] line by line
#[derive(Debug)]
pub struct SectionBuilder {
    tree: SectionTree,
    /// Path from the root to the cursor; never empty
    cursor: Vec<SectionId>,
    last_indentation: usize,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            tree: SectionTree::new(),
            cursor: vec![SectionId::ROOT],
            last_indentation: 0,
        }
    }

    /// The section new lines are currently appended to
    pub fn cursor(&self) -> SectionId {
        // The root is never popped
        self.cursor[self.cursor.len() - 1]
    }

    /// Number of levels below the root the cursor sits at
    pub fn cursor_depth(&self) -> usize {
        self.cursor.len() - 1
    }

    pub fn last_indentation(&self) -> usize {
        self.last_indentation
    }

    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Walk the cursor up `levels` times, stopping at the root.
    pub fn pop_levels(&mut self, levels: usize) {
        for _ in 0..levels {
            if self.cursor.len() == 1 {
                break;
            }
            self.cursor.pop();
        }
        trace!(levels, depth = self.cursor_depth(), "dedent");
    }

    /// Insert `count` nested empty sections under the cursor and move into the deepest one.
    pub fn push_fillers(&mut self, count: usize) {
        for i in 0..count {
            let indentation = self.last_indentation + (i + 1) * INDENT_WIDTH;
            let filler = Section::new(String::new(), indentation, false, self.cursor());
            let id = self.tree.append(self.cursor(), filler);
            self.cursor.push(id);
            trace!(indentation, "inserted filler section");
        }
    }

    /// Move the cursor into its most recent child. Returns false, leaving the cursor alone,
    /// when there is no child to descend into.
    pub fn descend_into_last_child(&mut self) -> bool {
        match self.tree.last_child(self.cursor()) {
            Some(child) => {
                self.cursor.push(child);
                trace!(depth = self.cursor_depth(), "descend");
                true
            }
            None => {
                trace!("indent without a previous line to nest under");
                false
            }
        }
    }

    /// Place one content line.
    pub fn push_line(
        &mut self,
        content: &str,
        indentation: usize,
        sequence_item: bool,
    ) -> SectionId {
        let last = self.last_indentation;

        if indentation < last {
            self.pop_levels((last - indentation) / INDENT_WIDTH);
        } else if indentation > last {
            let levels = (indentation - last) / INDENT_WIDTH;
            self.push_fillers(levels.saturating_sub(1));
        }

        if indentation == last + INDENT_WIDTH {
            self.descend_into_last_child();
        }

        let section = Section::new(
            content.trim().to_string(),
            indentation,
            sequence_item,
            self.cursor(),
        );
        let id = self.tree.append(self.cursor(), section);
        self.last_indentation = indentation;
        id
    }

    pub fn finish(self) -> SectionTree {
        self.tree
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
