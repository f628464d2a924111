#![no_main]

use landmarks::{parse, Document, Handler, HandlerResult, HtmlPolicy, Range, XmlPolicy, CONTINUE};
use libfuzzer_sys::fuzz_target;

struct Counter(usize);

impl Handler for Counter {
    fn text(&mut self, _doc: &Document<'_>, _text: Range) -> HandlerResult {
        self.0 += 1;
        CONTINUE
    }
}

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);

    let mut counter = Counter(0);
    parse(&source, HtmlPolicy, &mut counter).unwrap();

    let mut counter = Counter(0);
    parse(&source, XmlPolicy, &mut counter).unwrap();
});
