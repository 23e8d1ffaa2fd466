//! Template file contents shared by every model type

/// Container build/push/run helper
pub const CONTAINER_UTIL_SH: &str = r#"#!/usr/bin/env bash
#
# Build, push and run the prediction service container.
#
set -euo pipefail

TARGET_DOCKER_IMAGE="{{target_docker_image}}"
SCRIPT_DIR="$(cd "$(dirname "${BASH_SOURCE[0]}")" && pwd)"
PORT="${PORT:-8551}"

function print_usage() {
  cat <<EOF
Usage: $(basename "$0") <command>

Commands:
  build   Build ${TARGET_DOCKER_IMAGE} from ${SCRIPT_DIR}
  push    Push ${TARGET_DOCKER_IMAGE} to its registry
  run     Run ${TARGET_DOCKER_IMAGE} locally on port ${PORT}
EOF
}

function build() {
  docker build --rm -t "${TARGET_DOCKER_IMAGE}" "${SCRIPT_DIR}"
}

function push() {
  docker push "${TARGET_DOCKER_IMAGE}"
}

function run() {
  docker run --rm -it -p "${PORT}:8551" "${TARGET_DOCKER_IMAGE}"
}

if [[ $# -ne 1 ]]; then
  print_usage
  exit 1
fi

case "$1" in
  build) build ;;
  push) push ;;
  run) run ;;
  *)
    print_usage
    exit 1
    ;;
esac
"#;

/// Kubernetes deployment and service for the prediction endpoint
pub const DEPLOYMENT_YML: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{resource_name}}
  namespace: {{namespace}}
  labels:
    app: {{resource_name}}
spec:
  replicas: 1
  selector:
    matchLabels:
      app: {{resource_name}}
  template:
    metadata:
      labels:
        app: {{resource_name}}
    spec:
      containers:
        - name: {{resource_name}}
          # Replace with the image pushed by container_util.sh
          image: TARGET_DOCKER_IMAGE
          imagePullPolicy: Always
          ports:
            - containerPort: 8551
          readinessProbe:
            tcpSocket:
              port: 8551
            initialDelaySeconds: 10
            periodSeconds: 10
          resources:
            requests:
              cpu: 500m
              memory: 512Mi
            limits:
              cpu: "1"
              memory: 1Gi
---
apiVersion: v1
kind: Service
metadata:
  name: {{resource_name}}
  namespace: {{namespace}}
  labels:
    app: {{resource_name}}
spec:
  type: ClusterIP
  selector:
    app: {{resource_name}}
  ports:
    - name: http
      port: 8551
      targetPort: 8551
"#;

/// README copied verbatim into the generated project
pub const README_MD: &str = r#"# Containerized Model

This directory was generated by `model-scaffold`. It wraps a trained model
behind a prediction HTTP endpoint using the model SDK's `SimpleModelWrapper`
and packages it as a container image that can be deployed to Kubernetes.

## Layout

| Path | Purpose |
|------|---------|
| `container_util.sh` | Build, push and run the container image |
| `deployment.yml` | Kubernetes `Deployment` and `Service` |
| `Dockerfile` | Image definition |
| `environment.yml` | Conda environment used during local development |
| `requirements.txt` | Python dependencies installed into the image |
| `src/prediction_service.py` | Prediction service entry point |
| `src/utils.py` | Model loading helpers |
| `model/` | Place the trained model artifact and `metadata.yml` here |

Models of type `h2o_mojo` additionally get:

| Path | Purpose |
|------|---------|
| `ext_packages/` | Runtime wheels that are not available from a package index |
| `license/` | Runtime license file |

## Quick Start

1. Copy the trained model into `model/` and update `model/metadata.yml`.
2. Adjust `src/prediction_service.py` if the model needs an encoder or
   custom scoring.
3. Build the image:

   ```bash
   ./container_util.sh build
   ```

4. Run it locally and send a prediction request:

   ```bash
   ./container_util.sh run
   curl -X POST http://localhost:8551/predict \
     -H 'Content-Type: application/json' \
     -d '{"payload": {"instances": [[1, 2, 3]]}}'
   ```

5. Push the image and deploy it, see `DEPLOYMENT.md`.
"#;

/// Deployment guide copied verbatim into the generated project
pub const DEPLOYMENT_MD: &str = r"# Deployment

## Prerequisites

- Docker with access to the target image registry
- `kubectl` configured for the target cluster
- The target namespace exists (`kubectl create namespace <namespace>`)

## Push the image

```bash
./container_util.sh build
./container_util.sh push
```

## Deploy

Edit `deployment.yml` and replace the `image:` placeholder with the image
reference that was pushed, then apply it:

```bash
kubectl apply -f deployment.yml
```

Check that the pod became ready:

```bash
kubectl get pods -n <namespace> -l app=<resource-name>
```

## Reach the service

The manifest creates a `ClusterIP` service on port 8551. From inside the
cluster the endpoint is:

```
http://<resource-name>.<namespace>.svc.cluster.local:8551/predict
```

For local testing, forward the port:

```bash
kubectl port-forward -n <namespace> svc/<resource-name> 8551:8551
```

## Updating

Rebuild and push the image, then restart the deployment:

```bash
kubectl rollout restart deployment/<resource-name> -n <namespace>
```

## Removing

```bash
kubectl delete -f deployment.yml
```
";

/// Look up a template of the common set by identifier
#[must_use]
pub fn common(name: &str) -> Option<&'static str> {
    match name {
        "container_util.sh" => Some(CONTAINER_UTIL_SH),
        "deployment.yml" => Some(DEPLOYMENT_YML),
        _ => None,
    }
}

/// Look up a static reference document by file name
#[must_use]
pub fn document(name: &str) -> Option<&'static str> {
    match name {
        "README.md" => Some(README_MD),
        "DEPLOYMENT.md" => Some(DEPLOYMENT_MD),
        _ => None,
    }
}
