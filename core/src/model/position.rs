/// Index of a file within a package's file set. Positions compare and hash
/// by this first, so identifiers at the same line/column in different files
/// never collide as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileId(pub u32);

/// A single point in a source file.
///
/// The file-set is the source of truth for positions; nothing in this
/// crate computes a `Position` independently of the data the external
/// package loader supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub file: FileId,
    /// 0-based line.
    pub line: u32,
    /// 0-based column, in UTF-8 bytes from the start of the line.
    pub column: u32,
    /// Byte offset from the start of the file.
    pub byte: u32,
}

impl Position {
    pub fn new(file: FileId, line: u32, column: u32, byte: u32) -> Self {
        Self {
            file,
            line,
            column,
            byte,
        }
    }

    /// Builds a position in file 0 — convenient for single-file tests.
    #[cfg(test)]
    pub fn in_file0(line: u32, column: u32, byte: u32) -> Self {
        Self::new(FileId(0), line, column, byte)
    }
}

/// A source range covering exactly one identifier token.
///
/// Single-line ranges serialize as `[start_line, start_col, end_col]`;
/// multi-line ranges as `[start_line, start_col, end_line, end_col]`. Lines
/// and columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Builds a range spanning `[start, start + len)` bytes/columns on a
    /// single line — the common case, an identifier token.
    pub fn single_line(start: Position, len: u32) -> Self {
        let end = Position::new(start.file, start.line, start.column + len, start.byte + len);
        Self { start, end }
    }

    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Well-formedness: start ≤ end.
    pub fn is_well_formed(&self) -> bool {
        (self.start.line, self.start.column) <= (self.end.line, self.end.column)
    }

    /// Renders as the `[start_line, start_col, end_col]` or
    /// `[start_line, start_col, end_line, end_col]` wire form.
    pub fn to_wire_ints(&self) -> Vec<i32> {
        if self.is_single_line() {
            vec![
                self.start.line as i32,
                self.start.column as i32,
                self.end.column as i32,
            ]
        } else {
            vec![
                self.start.line as i32,
                self.start.column as i32,
                self.end.line as i32,
                self.end.column as i32,
            ]
        }
    }

    /// Ordering key: source order of start positions, ties broken by end
    /// position.
    pub fn order_key(&self) -> (u32, u32, u32, u32) {
        (
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column,
        )
    }
}
