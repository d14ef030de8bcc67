use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;

use crate::core::params::{THEME_COLOR, TILE_SIZE};
use crate::error::Result;

pub const BROWSERCONFIG_FILE_NAME: &str = "browserconfig.xml";

fn tile_src() -> String {
    format!("/mstile-{0}x{0}.png", TILE_SIZE)
}

/// Render the Windows tile configuration document.
pub fn render_browserconfig() -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("browserconfig")))?;
    writer.write_event(Event::Start(BytesStart::new("msapplication")))?;
    writer.write_event(Event::Start(BytesStart::new("tile")))?;

    let src = tile_src();
    let logo = BytesStart::new(format!("square{0}x{0}logo", TILE_SIZE))
        .with_attributes([("src", src.as_str())]);
    writer.write_event(Event::Empty(logo))?;

    writer.write_event(Event::Start(BytesStart::new("TileColor")))?;
    writer.write_event(Event::Text(BytesText::new(THEME_COLOR)))?;
    writer.write_event(Event::End(BytesEnd::new("TileColor")))?;

    writer.write_event(Event::End(BytesEnd::new("tile")))?;
    writer.write_event(Event::End(BytesEnd::new("msapplication")))?;
    writer.write_event(Event::End(BytesEnd::new("browserconfig")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_browserconfig(output: &Path) -> Result<()> {
    std::fs::write(output, render_browserconfig()?)?;
    Ok(())
}
