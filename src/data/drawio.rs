//! draw.io (mxGraph) XML export.
//!
//! Produces a diagram that reproduces the map on a draw.io page: the four
//! evolution-stage bands, axis lines and labels as a static scaffold, then
//! one ellipse per component and one connector per connection. Output is
//! deterministic for a given document, so files diff cleanly.

use super::document::{DocConnection, MapDocument};
use crate::constants::{
    DRAWIO_DEPENDENCY_COLOR, DRAWIO_ELLIPSE_HEIGHT, DRAWIO_ELLIPSE_WIDTH, DRAWIO_FLOW_COLOR,
    DRAWIO_X_OFFSET, DRAWIO_X_SCALE, DRAWIO_Y_OFFSET, DRAWIO_Y_SCALE,
};
use crate::types::{EdgeKind, EdgeStyle, EvolutionStage};
use std::collections::HashSet;
use std::fmt::Write;

/// Render a document as a complete draw.io file.
pub fn export_drawio(doc: &MapDocument) -> String {
    let mut out = String::with_capacity(8192);
    out.push_str(HEADER);
    push_scaffold(&mut out);

    for component in &doc.components {
        // mxGeometry positions an ellipse by its top-left corner; offset by
        // half the size so the ellipse center lands on the map position.
        let cx = component.x * DRAWIO_X_SCALE + DRAWIO_X_OFFSET - DRAWIO_ELLIPSE_WIDTH / 2.0;
        let cy = component.y * DRAWIO_Y_SCALE + DRAWIO_Y_OFFSET - DRAWIO_ELLIPSE_HEIGHT / 2.0;
        let _ = write!(
            out,
            "        <mxCell id=\"component-{id}\" value=\"{name}\" style=\"ellipse;whiteSpace=wrap;html=1;fillColor={color};strokeColor=#000000;fontColor=#FFFFFF;fontSize=12;fontStyle=1;aspect=fixed\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"{cx}\" y=\"{cy}\" width=\"{w}\" height=\"{h}\" as=\"geometry\"/>\n        </mxCell>\n",
            id = escape_xml(&component.id),
            name = escape_xml(&component.name),
            color = escape_xml(&component.color),
            w = DRAWIO_ELLIPSE_WIDTH,
            h = DRAWIO_ELLIPSE_HEIGHT,
        );
    }

    let known: HashSet<&str> = doc.components.iter().map(|c| c.id.as_str()).collect();
    for connection in &doc.connections {
        if !known.contains(connection.from.as_str()) || !known.contains(connection.to.as_str()) {
            tracing::warn!(id = %connection.id, "skipping connection with missing endpoint");
            continue;
        }
        push_connection(&mut out, connection);
    }

    out.push_str(FOOTER);
    out
}

fn push_connection(out: &mut String, connection: &DocConnection) {
    let stroke_color = match connection.kind {
        EdgeKind::Flow => DRAWIO_FLOW_COLOR,
        EdgeKind::Dependency => DRAWIO_DEPENDENCY_COLOR,
    };
    let dash = match connection.style {
        EdgeStyle::Dashed => "dashed=1;",
        EdgeStyle::Solid => "",
    };
    let _ = write!(
        out,
        "        <mxCell id=\"connection-{id}\" value=\"{label}\" style=\"endArrow=classic;html=1;strokeColor={stroke_color};{dash}fontSize=10;exitX=0.5;exitY=0.5;exitDx=0;exitDy=0;entryX=0.5;entryY=0.5;entryDx=0;entryDy=0\" edge=\"1\" parent=\"1\" source=\"component-{from}\" target=\"component-{to}\">\n          <mxGeometry relative=\"1\" as=\"geometry\"/>\n        </mxCell>\n",
        id = escape_xml(&connection.id),
        label = escape_xml(connection.label.as_deref().unwrap_or("")),
        from = escape_xml(&connection.from),
        to = escape_xml(&connection.to),
    );
}

/// Static page furniture: stage bands, axis lines, grid, labels.
fn push_scaffold(out: &mut String) {
    // Stage background bands, derived from the evolution band extents.
    let fills = ["#FEF3C7", "#DDD6FE", "#DCFCE7", "#FEE2E2"];
    for (stage, fill) in EvolutionStage::all().iter().zip(fills) {
        let (min, max) = stage.bounds();
        let x = min * DRAWIO_X_SCALE + DRAWIO_X_OFFSET;
        let width = (max - min) * DRAWIO_X_SCALE;
        let _ = write!(
            out,
            "        <mxCell id=\"{id}-bg\" value=\"\" style=\"rounded=0;whiteSpace=wrap;html=1;fillColor={fill};strokeColor=none;opacity=30\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"{x}\" y=\"100\" width=\"{width}\" height=\"600\" as=\"geometry\"/>\n        </mxCell>\n",
            id = stage.name().to_lowercase(),
        );
    }

    out.push_str(
        "        <mxCell id=\"evolution-line\" value=\"\" style=\"endArrow=none;html=1;strokeColor=#374151;strokeWidth=3\" edge=\"1\" parent=\"1\">\n          <mxGeometry width=\"50\" height=\"50\" relative=\"1\" as=\"geometry\">\n            <mxPoint x=\"100\" y=\"700\" as=\"sourcePoint\"/>\n            <mxPoint x=\"900\" y=\"700\" as=\"targetPoint\"/>\n          </mxGeometry>\n        </mxCell>\n        <mxCell id=\"value-chain-line\" value=\"\" style=\"endArrow=none;html=1;strokeColor=#374151;strokeWidth=3\" edge=\"1\" parent=\"1\">\n          <mxGeometry width=\"50\" height=\"50\" relative=\"1\" as=\"geometry\">\n            <mxPoint x=\"100\" y=\"100\" as=\"sourcePoint\"/>\n            <mxPoint x=\"100\" y=\"700\" as=\"targetPoint\"/>\n          </mxGeometry>\n        </mxCell>\n        <mxCell id=\"evolution-axis\" value=\"Evolution\" style=\"text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=16;fontStyle=1\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"450\" y=\"730\" width=\"100\" height=\"30\" as=\"geometry\"/>\n        </mxCell>\n        <mxCell id=\"value-chain-axis\" value=\"Value Chain\" style=\"text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=16;fontStyle=1;rotation=-90\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"20\" y=\"360\" width=\"100\" height=\"30\" as=\"geometry\"/>\n        </mxCell>\n",
    );

    // Stage labels centered under each band.
    for stage in EvolutionStage::all() {
        let (min, max) = stage.bounds();
        let center = (min + max) / 2.0 * DRAWIO_X_SCALE + DRAWIO_X_OFFSET;
        let width = if *stage == EvolutionStage::Commodity {
            80.0
        } else {
            60.0
        };
        let _ = write!(
            out,
            "        <mxCell id=\"{id}-label\" value=\"{name}\" style=\"text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=12;fontStyle=1\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"{x}\" y=\"710\" width=\"{width}\" height=\"20\" as=\"geometry\"/>\n        </mxCell>\n",
            id = stage.name().to_lowercase(),
            name = stage.name(),
            x = center - width / 2.0,
        );
    }

    out.push_str(
        "        <mxCell id=\"visible-label\" value=\"Visible\" style=\"text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=12;fontStyle=1\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"40\" y=\"90\" width=\"60\" height=\"20\" as=\"geometry\"/>\n        </mxCell>\n        <mxCell id=\"invisible-label\" value=\"Invisible\" style=\"text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=12;fontStyle=1\" vertex=\"1\" parent=\"1\">\n          <mxGeometry x=\"40\" y=\"690\" width=\"60\" height=\"20\" as=\"geometry\"/>\n        </mxCell>\n",
    );
}

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<mxfile host=\"app.diagrams.net\" agent=\"Strategic Map Editor\" version=\"1.0\">\n  <diagram name=\"Strategic Map\" id=\"strategic-map\">\n    <mxGraphModel dx=\"1422\" dy=\"794\" grid=\"1\" gridSize=\"10\" guides=\"1\" tooltips=\"1\" connect=\"1\" arrows=\"1\" fold=\"1\" page=\"1\" pageScale=\"1\" pageWidth=\"1169\" pageHeight=\"827\" math=\"0\" shadow=\"0\">\n      <root>\n        <mxCell id=\"0\"/>\n        <mxCell id=\"1\" parent=\"0\"/>\n";

const FOOTER: &str = "      </root>\n    </mxGraphModel>\n  </diagram>\n</mxfile>\n";

/// Escape text destined for an XML attribute value.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
