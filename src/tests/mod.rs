
/// Every word over `alphabet` with at most `max_len` symbols, shortest first.
pub(crate) fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];

    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());

        for word in &frontier {
            for symbol in alphabet {
                let mut longer = word.clone();
                longer.push(*symbol);
                next.push(longer);
            }
        }

        all.extend(next.iter().cloned());
        frontier = next;
    }

    all
}
