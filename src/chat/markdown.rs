// vai - a vim-modal terminal chat client for AI conversations
// Copyright (C) 2026  vai contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::chat::Block;
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Split markdown into renderable blocks: prose stays together as text,
/// fenced code becomes its own block with a 1-based sequence number so the
/// user can refer to "code block 2" when copying.
///
/// Prose keeps its paragraph breaks but drops inline markup; code bodies are
/// preserved byte for byte. Indented code blocks count the same as fenced
/// ones, they just carry no language tag.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut prose = String::new();
    let mut code: Option<(String, String)> = None;
    let mut code_count = 0usize;

    let flush_prose = |prose: &mut String, blocks: &mut Vec<Block>| {
        let trimmed = prose.trim_end().to_owned();
        if !trimmed.is_empty() {
            blocks.push(Block::Text { content: trimmed });
        }
        prose.clear();
    };

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                flush_prose(&mut prose, &mut blocks);
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_owned()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, body)) = code.take() {
                    code_count += 1;
                    let lines = body
                        .strip_suffix('\n')
                        .unwrap_or(&body)
                        .split('\n')
                        .map(str::to_owned)
                        .collect();
                    blocks.push(Block::Code { lang, lines, number: code_count });
                }
            }
            Event::Text(t) => {
                if let Some((_, body)) = code.as_mut() {
                    body.push_str(&t);
                } else {
                    prose.push_str(&t);
                }
            }
            Event::Code(t) => {
                prose.push('`');
                prose.push_str(&t);
                prose.push('`');
            }
            Event::SoftBreak => prose.push(' '),
            Event::HardBreak => prose.push('\n'),
            Event::Start(Tag::Item) => prose.push_str("- "),
            Event::End(TagEnd::Item | TagEnd::Heading(_)) => prose.push('\n'),
            Event::End(TagEnd::Paragraph) => prose.push_str("\n\n"),
            Event::Rule => prose.push_str("---\n\n"),
            _ => {}
        }
    }

    flush_prose(&mut prose, &mut blocks);
    blocks
}
