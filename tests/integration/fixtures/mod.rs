// Test fixtures with known book texts and expected reports
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// The worked example: title line, one guarded abbreviation, one single-word fragment
pub const SAMPLE_TEXT: &str = "Title: Test Book\nHello world. Mr. Smith runs fast! Hi.";

/// Short book with a header block, a repeated sentence and wrapped lines
pub const TINY_TALE: &str = "Title: A Tiny Tale
Author: Nobody

It was a cold night. Dr. Brown knocked twice! Who is there? Me!
It was a cold night. The door opened slowly, and a tall figure stepped inside.
";

/// Expected report for TINY_TALE
pub const TINY_TALE_REPORT: &str = "Top 10 Longest Sentences by Characters:
57 chars
55 chars
24 chars
20 chars
13 chars

Top 10 Shortest Sentences by Words:
Who is there?
Dr. Brown knocked twice!
It was a cold night.
The door opened slowly, and a tall figure stepped inside.
Title: A Tiny Tale Author: Nobody It was a cold night.

Top 10 Longest Words:
knocked
stepped
author
nobody
opened
slowly
figure
inside
title
night

Top 10 Most Common Letters:
t: 14 occurrences
e: 14 occurrences
o: 12 occurrences
i: 11 occurrences
a: 10 occurrences
d: 10 occurrences
n: 9 occurrences
l: 8 occurrences
h: 6 occurrences
r: 6 occurrences

Top 10 Words by Frequency:
a: 4
it: 2
was: 2
cold: 2
night: 2
title: 1
tiny: 1
tale: 1
author: 1
nobody: 1
";

/// Text with no sentence boundaries and no multi-word candidates
pub const NO_SENTENCES: &str = "Title:Fragments\n";

/// Large text block for throughput testing (500 sentences)
pub fn generate_large_text() -> String {
    let mut result = String::from("Title: Generated Volume\n");

    for i in 1..=500 {
        result.push_str(&format!("This is sentence number {i}. "));
        if i % 50 == 0 {
            result.push('\n');
        }
    }

    result
}
