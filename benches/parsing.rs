//! Benchmarks for line decoding and command building.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use netirc::{CommandBuilder, Message, MessageDecoder, Verb};

/// Keep-alive probe
const SIMPLE_MESSAGE: &str = "PING :tmi.twitch.tv";

/// Chat delivery with a full user prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// User prefix without the leading colon
const BARE_PREFIX_MESSAGE: &str = "nick!user@host.tmi.twitch.tv PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str = ":tmi.twitch.tv 001 justinfan123 :Welcome, GLHF!";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, line) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("bare_prefix", BARE_PREFIX_MESSAGE),
        ("numeric_response", NUMERIC_RESPONSE),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", name), line, |b, s| {
            b.iter(|| black_box(Message::parse(black_box(s))))
        });
    }

    group.finish();
}

fn benchmark_chunk_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chunk Decoding");

    let chunk: String = [SIMPLE_MESSAGE, PREFIX_MESSAGE, NUMERIC_RESPONSE]
        .iter()
        .cycle()
        .take(64)
        .map(|line| format!("{}\r\n", line))
        .collect();
    let decoder = MessageDecoder::new();
    let utf8 = MessageDecoder::with_encoding("utf-8").unwrap();

    group.bench_function("ascii_64_lines", |b| {
        b.iter(|| black_box(decoder.decode(black_box(chunk.as_bytes()))))
    });

    group.bench_function("utf8_64_lines", |b| {
        b.iter(|| black_box(utf8.decode(black_box(chunk.as_bytes()))))
    });

    group.finish();
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Command Building");

    group.bench_function("join_list", |b| {
        b.iter(|| {
            let line = CommandBuilder::from_line(Verb::JOIN, black_box("Cohh,Soda,,#Lirik"))
                .build()
                .unwrap();
            black_box(line)
        })
    });

    group.bench_function("privmsg", |b| {
        b.iter(|| {
            let line = CommandBuilder::new(Verb::PRIVMSG, [black_box("#channel"), black_box("Hello!")])
                .build()
                .unwrap();
            black_box(line)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_chunk_decoding,
    benchmark_construction,
);

criterion_main!(benches);
