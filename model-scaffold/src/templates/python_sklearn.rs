//! Templates for pickled scikit-learn style models

/// Conda environment for local development
pub const ENVIRONMENT_YML: &str = r"name: prediction-service
channels:
  - defaults
  - conda-forge
dependencies:
  - python=3.8
  - pip
  - pip:
      - -r requirements.txt
";

/// Image definition
pub const DOCKERFILE: &str = r#"FROM {{base_docker_image}}

ENV PYTHONUNBUFFERED=1
WORKDIR /app

COPY requirements.txt /app/requirements.txt
RUN pip install --no-cache-dir -r /app/requirements.txt

COPY src /app/src
COPY model /app/model

EXPOSE 8551

CMD ["python", "src/prediction_service.py"]
"#;

/// Prediction service entry point
pub const PREDICTION_SERVICE_PY: &str = r"import os

from certifai.model.sdk import SimpleModelWrapper

from utils import load_metadata, load_model

MODEL_DIR = os.environ.get('MODEL_DIR', os.path.join(os.path.dirname(__file__), '..', 'model'))


def main():
    metadata = load_metadata(MODEL_DIR)
    model, encoder = load_model(MODEL_DIR, metadata['model_file'])

    app = SimpleModelWrapper(model=model,
                             encoder=encoder,
                             supports_soft_scores=metadata.get('supports_soft_scores', False),
                             endpoint_url=metadata.get('endpoint_url', '/predict'))
    app.run(production=True)


if __name__ == '__main__':
    main()
";

/// Model loading helpers
pub const UTILS_PY: &str = r#"import os
import pickle

import yaml


def load_metadata(model_dir):
    with open(os.path.join(model_dir, 'metadata.yml')) as f:
        return yaml.safe_load(f)


def load_model(model_dir, model_file):
    """Load a pickled model.

    The pickle may hold the bare model or a dict with 'model' and an
    optional 'encoder' entry.
    """
    with open(os.path.join(model_dir, model_file), 'rb') as f:
        saved = pickle.load(f)

    if isinstance(saved, dict):
        return saved.get('model'), saved.get('encoder')
    return saved, None
"#;

/// Python dependencies installed into the image
pub const REQUIREMENTS_TXT: &str = r"cortex-certifai-common
cortex-certifai-model-sdk
numpy
pandas
pyyaml
scikit-learn
";

/// Model metadata read by the prediction service
pub const METADATA_YML: &str = r"# Describe the model artifact placed in this directory.
model_file: model.pkl
endpoint_url: /predict
supports_soft_scores: false
";

/// Look up a template of this set by identifier
#[must_use]
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "environment.yml" => Some(ENVIRONMENT_YML),
        "Dockerfile" => Some(DOCKERFILE),
        "src/prediction_service.py" => Some(PREDICTION_SERVICE_PY),
        "src/utils.py" => Some(UTILS_PY),
        "requirements.txt" => Some(REQUIREMENTS_TXT),
        "model/metadata.yml" => Some(METADATA_YML),
        _ => None,
    }
}
