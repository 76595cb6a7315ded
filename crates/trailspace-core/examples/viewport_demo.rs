use trailspace_core::{
    Decoration, DecorationManager, Line, Region, Span, StyleConfig, StyleRegistry, ViewportHost,
};

/// A toy monospace viewport that prints what it is asked to paint.
struct DemoViewport {
    lines: Vec<Line>,
    decorations: Vec<Decoration>,
}

impl DemoViewport {
    fn new(source: &str) -> Self {
        let mut offset = 0;
        let lines = source
            .split('\n')
            .map(|text| {
                let line = Line::new(offset, text);
                offset = line.end + 1;
                line
            })
            .collect();
        Self {
            lines,
            decorations: Vec::new(),
        }
    }
}

impl ViewportHost for DemoViewport {
    fn visible_lines(&self) -> Vec<Line> {
        self.lines.clone()
    }

    fn resolve_geometry(&self, span: Span) -> Option<Region> {
        let (row, line) = self
            .lines
            .iter()
            .enumerate()
            .find(|(_, l)| l.start <= span.start && span.end <= l.end)?;
        Some(Region::new(
            (span.start - line.start) as f32 * 8.0,
            row as f32 * 16.0,
            span.len() as f32 * 8.0,
            16.0,
        ))
    }

    fn add_decoration(&mut self, decoration: Decoration) {
        self.decorations.push(decoration);
    }

    fn remove_all_decorations(&mut self) {
        self.decorations.clear();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let source = "fn main() {  \n    let greeting = \"hi\";\t\n}\n   \nmixed()\t\t  ";
    let host = DemoViewport::new(source);
    let mut manager = DecorationManager::new(host);
    manager.redraw_all().unwrap();

    println!("decorations with the default palette:");
    for d in manager.surface().decorations.iter() {
        println!(
            "  {:?} [{}, {}) at x={} y={} w={} h={}",
            d.kind, d.span.start, d.span.end, d.region.x, d.region.y, d.region.width, d.region.height
        );
    }

    // Share one config across viewports through a registry; changing it
    // repaints every bound manager.
    let mut registry = StyleRegistry::new();
    let manager = std::rc::Rc::new(std::cell::RefCell::new(manager));
    let target = std::rc::Rc::clone(&manager);
    registry.subscribe(Box::new(move |config| {
        target.borrow_mut().update_styles(*config).unwrap();
    }));

    registry.set_styles(StyleConfig::classic());
    println!(
        "after switching to the classic palette: {} decorations, spaces fill {:?}",
        manager.borrow().surface().decorations.len(),
        manager.borrow().styles().spaces.fill
    );
}
