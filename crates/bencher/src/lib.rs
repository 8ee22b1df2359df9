/// A message head fixture together with the benchmark it is run under.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, file: TestFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn kind(&self) -> HeadKind {
        self.file.kind
    }

    /// Size of the fixture, for criterion throughput.
    pub fn len(&self) -> u64 {
        self.file.content.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.file.content.is_empty()
    }
}

/// A head read from `resources/`, CRLF line endings included.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
    kind: HeadKind,
}

impl TestFile {
    pub const fn request(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content, kind: HeadKind::Request }
    }

    pub const fn response(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content, kind: HeadKind::Response }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.content.as_bytes()
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadKind {
    Request,
    Response,
}
