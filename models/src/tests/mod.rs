mod attachment;
