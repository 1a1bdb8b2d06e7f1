use crate::entities::viewport::Viewport;
use crate::result::{LoaderErr, RenderErr};
use crate::testingtools::Spy;
use crate::use_cases::engine::{Document, Engine, EngineHandle, LibSource, LibrarySource, Page};

use cairo::Context;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Page size of every document understood by the fake engine, in PDF points.
pub const FAKE_PAGE_SIZE: (f64, f64) = (100.0, 50.0);

const EMPTY_MARKER: &[u8] = b"%no-pages";

/// Bytes the fake engine parses into a one-page document.
pub fn fake_pdf() -> Vec<u8> {
    b"%PDF-1.7\n%fake document\n%%EOF".to_vec()
}

/// Bytes the fake engine parses into a document without pages.
pub fn empty_pdf() -> Vec<u8> {
    [b"%PDF-1.7\n".as_slice(), EMPTY_MARKER].concat()
}

pub fn fake_source() -> LibSource {
    Arc::new(FakeSource {
        render_spy: Spy::default(),
    })
}

/// Source binding an engine which reports every page rendering to the returned [`Spy`].
pub fn rendering_spy() -> (Spy, LibSource) {
    let render_spy = Spy::default();
    let source = Arc::new(FakeSource {
        render_spy: render_spy.clone(),
    });
    (render_spy, source)
}

struct FakeSource {
    render_spy: Spy,
}

impl LibrarySource for FakeSource {
    fn bind(&self, _location: &Path) -> Result<EngineHandle, LoaderErr> {
        Ok(Arc::new(FakeEngine {
            render_spy: self.render_spy.clone(),
        }))
    }
}

struct FakeEngine {
    render_spy: Spy,
}

impl Engine for FakeEngine {
    fn parse(&self, bytes: Vec<u8>) -> Result<Box<dyn Document + '_>, RenderErr> {
        if !bytes.starts_with(b"%PDF-") {
            return Err(RenderErr::Parse("No PDF header found".into()));
        }
        Ok(Box::new(FakeDocument {
            has_pages: !bytes.ends_with(EMPTY_MARKER),
            render_spy: &self.render_spy,
        }))
    }
}

struct FakeDocument<'a> {
    has_pages: bool,
    render_spy: &'a Spy,
}

impl Document for FakeDocument<'_> {
    fn page(&self, number: u16) -> Result<Box<dyn Page + '_>, RenderErr> {
        if !self.has_pages || number != 1 {
            return Err(RenderErr::MissingPage(number));
        }
        Ok(Box::new(FakePage {
            render_spy: self.render_spy,
        }))
    }
}

struct FakePage<'a> {
    render_spy: &'a Spy,
}

impl Page for FakePage<'_> {
    fn viewport(&self, scale: f64) -> Viewport {
        Viewport::new(FAKE_PAGE_SIZE.0, FAKE_PAGE_SIZE.1, scale)
    }

    /// Paints the top-left quarter black, leaving the rest untouched.
    fn render(&self, ctx: &Context, viewport: &Viewport) -> Result<(), RenderErr> {
        self.render_spy.signal();
        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.rectangle(0.0, 0.0, viewport.width / 2.0, viewport.height / 2.0);
        ctx.fill()?;
        Ok(())
    }
}

pub fn failing() -> LibSource {
    Arc::new(FailingSource)
}

struct FailingSource;

impl LibrarySource for FailingSource {
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        Err(not_found(location))
    }
}

fn not_found(location: &Path) -> LoaderErr {
    LoaderErr::Bind {
        location: location.to_path_buf(),
        reason: "library not found".into(),
    }
}

/// Fails at `primary`, binds the fake engine anywhere else.
pub fn primary_failing(primary: &Path) -> LibSource {
    Arc::new(PrimaryFailingSource {
        primary: primary.to_path_buf(),
        fallback: fake_source(),
    })
}

struct PrimaryFailingSource {
    primary: PathBuf,
    fallback: LibSource,
}

impl LibrarySource for PrimaryFailingSource {
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        if location == self.primary {
            return Err(not_found(location));
        }
        self.fallback.bind(location)
    }
}

pub fn slow(source: LibSource, delay: Duration) -> LibSource {
    Arc::new(SlowSource { source, delay })
}

struct SlowSource {
    source: LibSource,
    delay: Duration,
}

impl LibrarySource for SlowSource {
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        thread::sleep(self.delay);
        self.source.bind(location)
    }
}

/// Source which fails until the returned [`Switch`] is turned on.
pub fn toggled(on: bool) -> (Switch, LibSource) {
    let state = Arc::new(AtomicBool::new(on));
    let source = Arc::new(ToggledSource {
        state: state.clone(),
        source: fake_source(),
    });
    (Switch { state }, source)
}

pub struct Switch {
    state: Arc<AtomicBool>,
}

impl Switch {
    pub fn turn_on(&self) {
        self.state.store(true, Ordering::SeqCst);
    }
}

struct ToggledSource {
    state: Arc<AtomicBool>,
    source: LibSource,
}

impl LibrarySource for ToggledSource {
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        if self.state.load(Ordering::SeqCst) {
            self.source.bind(location)
        } else {
            Err(not_found(location))
        }
    }
}

pub fn counting(source: LibSource) -> (SourceSpies, LibSource) {
    let binds = Arc::new(Mutex::new(Vec::new()));
    let spies = SourceSpies {
        binds: binds.clone(),
    };
    (spies, Arc::new(CountingSource { source, binds }))
}

struct CountingSource {
    source: LibSource,
    binds: Arc<Mutex<Vec<PathBuf>>>,
}

impl LibrarySource for CountingSource {
    fn bind(&self, location: &Path) -> Result<EngineHandle, LoaderErr> {
        self.binds.lock().push(location.to_path_buf());
        self.source.bind(location)
    }
}

pub struct SourceSpies {
    binds: Arc<Mutex<Vec<PathBuf>>>,
}

impl SourceSpies {
    pub fn binds(&self) -> usize {
        self.binds.lock().len()
    }

    pub fn binds_at(&self, location: &Path) -> usize {
        self.binds.lock().iter().filter(|l| *l == location).count()
    }
}
