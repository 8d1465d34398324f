//! Walks a completed analysis result and writes the layout summary:
//! handwritten-content detection, pages with their lines and words,
//! selection marks, and tables.

use std::io::{self, Write};

use crate::layout::words_in_line;
use crate::models::AnalyzeResult;

pub fn render_layout(result: &AnalyzeResult, out: &mut impl Write) -> io::Result<()> {
    if result.contains_handwriting() {
        writeln!(out, "Document contains handwritten content")?;
    } else {
        writeln!(out, "Document does not contain handwritten content")?;
    }

    for page in &result.pages {
        writeln!(out, "----Analyzing layout from page #{}----", page.page_number)?;
        writeln!(
            out,
            "Page has width: {} and height: {}, measured with unit: {}",
            page.width, page.height, page.unit
        )?;

        if let Some(lines) = &page.lines {
            for (line_idx, line) in lines.iter().enumerate() {
                let words = words_in_line(page, line);
                writeln!(
                    out,
                    "...Line # {} has word count {} and text '{}' within bounding polygon '{}'",
                    line_idx,
                    words.len(),
                    line.content,
                    fmt_polygon(line.polygon.as_deref())
                )?;

                for word in words {
                    writeln!(
                        out,
                        "......Word '{}' has a confidence of {}",
                        word.content, word.confidence
                    )?;
                }
            }
        }

        if let Some(selection_marks) = &page.selection_marks {
            for mark in selection_marks {
                writeln!(
                    out,
                    "Selection mark is '{}' within bounding polygon '{}' and has a confidence of {}",
                    mark.state,
                    fmt_polygon(mark.polygon.as_deref()),
                    mark.confidence
                )?;
            }
        }
    }

    if let Some(tables) = &result.tables {
        for (table_idx, table) in tables.iter().enumerate() {
            writeln!(
                out,
                "Table # {} has {} rows and {} columns",
                table_idx, table.row_count, table.column_count
            )?;
            if let Some(regions) = &table.bounding_regions {
                for region in regions {
                    writeln!(
                        out,
                        "Table # {} location on page: {} is {}",
                        table_idx,
                        region.page_number,
                        fmt_polygon(Some(&region.polygon))
                    )?;
                }
            }
            for cell in &table.cells {
                writeln!(
                    out,
                    "...Cell[{}][{}] has text '{}'",
                    cell.row_index, cell.column_index, cell.content
                )?;
                if let Some(regions) = &cell.bounding_regions {
                    for region in regions {
                        writeln!(
                            out,
                            "...content on page {} is within bounding polygon '{}'",
                            region.page_number,
                            fmt_polygon(Some(&region.polygon))
                        )?;
                    }
                }
            }
        }
    }

    writeln!(out, "----------------------------------------")?;
    Ok(())
}

fn fmt_polygon(polygon: Option<&[f32]>) -> String {
    format!("{:?}", polygon.unwrap_or_default())
}
