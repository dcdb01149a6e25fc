use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::representation::gene::TrainingGene;

/// Splits the training genes into `n_folds` train/test pairs, stratified by
/// localization.
///
/// The genes are shuffled with `seed` first, then the genes of each
/// localization are dealt round robin over the folds, so every class is spread
/// as evenly as its size allows. Genes without a localization form their own
/// stratum. Each returned pair holds one fold as the test part and the
/// remaining folds as the training part.
///
/// # Examples
///
/// ```ignore
/// let folds = split_train_test_n_fold(&genes, 5, 42);
/// for (train, test) in folds {
///     // classify test against train
/// }
/// ```
pub fn split_train_test_n_fold(
    genes: &[TrainingGene],
    n_folds: usize,
    seed: u64,
) -> Vec<(Vec<TrainingGene>, Vec<TrainingGene>)> {
    if n_folds == 0 {
        return Vec::new();
    }

    let mut shuffled = genes.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let mut classes: Vec<Option<&str>> = Vec::new();
    for gene in &shuffled {
        let label = gene.localization.as_deref();
        if !classes.contains(&label) {
            classes.push(label);
        }
    }

    let mut folds: Vec<Vec<TrainingGene>> = vec![Vec::new(); n_folds];
    for class in classes {
        let of_class = shuffled
            .iter()
            .filter(|gene| gene.localization.as_deref() == class);
        for (n, gene) in of_class.enumerate() {
            folds[n % n_folds].push(gene.clone());
        }
    }

    let mut ret_folds = Vec::with_capacity(n_folds);
    for fold in 0..n_folds {
        let test_fold = folds[fold].clone();
        let mut train_fold = Vec::new();
        for (join_fold, genes) in folds.iter().enumerate() {
            if join_fold != fold {
                train_fold.extend(genes.iter().cloned());
            }
        }
        ret_folds.push((train_fold, test_fold));
    }

    return ret_folds;
}
